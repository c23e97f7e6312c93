use clap::{
  builder::{styling::AnsiColor, Styles},
  Parser, ValueHint,
};
use std::path::PathBuf;

fn clap_v3_styles() -> Styles {
  Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default())
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles(clap_v3_styles()))]
pub struct Args {
  // `[::]` binds to IPv6 and IPv4 at the same time
  // See: https://github.com/tokio-rs/axum/discussions/834
  /// Address to bind
  #[arg(short = 'i', long = "addr")]
  #[arg(default_value = "[::]:8080")]
  #[arg(env = "VIDEO_SVC_ADDR")]
  pub addr: String,
  /// Database url to connect; omit to keep the catalog in process memory
  #[arg(short = 'd', long = "database-url")]
  #[arg(env = "VIDEO_SVC_DATABASE_URL")]
  pub database_url: Option<String>,
  /// Directory for uploaded media payloads; overrides the config file
  #[arg(long = "data-dir", value_name = "DIR")]
  #[arg(value_hint = ValueHint::DirPath)]
  #[arg(env = "VIDEO_SVC_DATA_DIR")]
  pub data_dir: Option<PathBuf>,
  /// Sets a custom config file
  #[arg(short = 'c', long = "config", value_name = "FILE")]
  #[arg(value_hint = ValueHint::FilePath)]
  #[arg(env = "VIDEO_SVC_CONFIG")]
  pub config: Option<PathBuf>,
}
