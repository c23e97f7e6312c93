use anyhow::Context;
use std::{
  fs::File,
  io::{BufReader, Read},
  path::{Path, PathBuf},
};

use serde::Deserialize;

mod default;

use default::*;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
  #[serde(default)]
  pub storage: StorageConfig,
  /// Base for generated data urls; derived from the request `Host` header when unset
  #[serde(default)]
  pub public_base_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct StorageConfig {
  #[serde(alias = "dir")]
  #[serde(default = "data_dir_default")]
  pub data_dir: PathBuf,
}

impl Config {
  pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let file = File::open(path)
      .with_context(|| format!("Failed to open config file `{}`", path.to_string_lossy()))?;
    let size_hint = file
      .metadata()
      .map(|metadata| metadata.len() as usize)
      .unwrap_or(8 * 1024);
    let mut buf = String::with_capacity(size_hint);
    BufReader::new(file)
      .read_to_string(&mut buf)
      .with_context(|| format!("Failed to read config file `{}`", path.to_string_lossy()))?;
    toml::from_str(&buf).with_context(|| {
      format!(
        "Failed to deserialize config file `{}`",
        path.to_string_lossy()
      )
    })
  }
}
