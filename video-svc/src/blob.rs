use std::path::PathBuf;

use anyhow::Context;
use tokio::{fs, io::AsyncWriteExt};

/// Filesystem-backed payload store, one file per video id. Keys never come
/// from user input, so there is no path to traverse out of the root.
#[derive(Clone, Debug)]
pub struct BlobStore {
  root: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
  #[error("no payload stored for video {0}")]
  NotFound(i64),
  #[error("blob i/o failed for video {id}")]
  Io {
    id: i64,
    #[source]
    source: std::io::Error,
  },
}

impl BlobStore {
  pub async fn open(root: impl Into<PathBuf>) -> anyhow::Result<BlobStore> {
    let root = root.into();
    fs::create_dir_all(&root)
      .await
      .with_context(|| format!("Failed to create blob directory `{}`", root.display()))?;
    Ok(BlobStore { root })
  }

  fn path_for(&self, id: i64) -> PathBuf {
    self.root.join(format!("video{id}.mpg"))
  }

  /// Replaces any previously stored payload; concurrent writers for one id
  /// race last-write-wins.
  pub async fn put(&self, id: i64, data: &[u8]) -> Result<(), BlobError> {
    let path = self.path_for(id);
    let mut file = fs::File::create(&path)
      .await
      .map_err(|source| BlobError::Io { id, source })?;
    file
      .write_all(data)
      .await
      .map_err(|source| BlobError::Io { id, source })?;
    file
      .flush()
      .await
      .map_err(|source| BlobError::Io { id, source })?;
    Ok(())
  }

  pub async fn get(&self, id: i64) -> Result<fs::File, BlobError> {
    match fs::File::open(self.path_for(id)).await {
      Ok(file) => Ok(file),
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(BlobError::NotFound(id)),
      Err(source) => Err(BlobError::Io { id, source }),
    }
  }
}
