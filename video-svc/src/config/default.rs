use super::*;

impl Default for Config {
  fn default() -> Self {
    Self {
      storage: Default::default(),
      public_base_url: None,
    }
  }
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      data_dir: data_dir_default(),
    }
  }
}

pub fn data_dir_default() -> PathBuf {
  PathBuf::from("video-data")
}
