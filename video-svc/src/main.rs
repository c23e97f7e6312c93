use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;

use video_svc::{cli::Args, config::Config, routes, state::App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  let addr = tokio::net::lookup_host(&args.addr)
    .await
    .with_context(|| format!("Cannot lookup DNS for addr: {}", args.addr))?
    .next()
    .with_context(|| format!("No DNS resp for addr: {}", args.addr))?;

  const LOG_ENV: &str = "VIDEO_SVC_LOG";
  if std::env::var_os(LOG_ENV).is_none() {
    std::env::set_var(LOG_ENV, "info");
  }
  pretty_env_logger::try_init_custom_env(LOG_ENV).context("Failed to init video-svc logger")?;

  let mut config = match &args.config {
    Some(path) => Config::load(path)?,
    None => Config::default(),
  };
  if let Some(dir) = args.data_dir {
    config.storage.data_dir = dir;
  }

  let app = Arc::new(App::new(config, args.database_url.as_deref()).await?);
  let router = routes::router(app);

  info!("Server is listening on {}", addr);
  axum::Server::try_bind(&addr)
    .context("Failed to bind address")?
    .serve(router.into_make_service())
    .await
    .context("Failed to launch server")?;

  Ok(())
}
