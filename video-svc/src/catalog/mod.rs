use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::data::Video;

mod mem;
mod pg;

pub use mem::MemCatalog;
pub use pg::PgCatalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
  #[error("no video with id {0}")]
  NotFound(i64),
  #[error("video {id} is already liked by `{user}`")]
  AlreadyLiked { id: i64, user: String },
  #[error("video {id} is not liked by `{user}`")]
  NotLiked { id: i64, user: String },
  #[error("database query failed")]
  Database(#[from] diesel::result::Error),
  #[error("failed to get pooled database connection")]
  Pool(#[from] bb8::RunError<diesel_async::pooled_connection::PoolError>),
}

/// Video metadata store. Backends differ only in persistence; both uphold
/// `likes == liked_by.len()` by making the like/unlike check-then-mutate
/// atomic per video.
#[async_trait]
pub trait Catalog: Send + Sync {
  /// Stores a video whose id is already assigned. Duplicate titles are fine.
  async fn insert(&self, video: Video) -> Result<Video, CatalogError>;

  async fn find_all(&self) -> Result<Vec<Video>, CatalogError>;

  async fn find_by_id(&self, id: i64) -> Result<Video, CatalogError>;

  /// Exact title match; an empty vec is not an error.
  async fn find_by_title(&self, title: &str) -> Result<Vec<Video>, CatalogError>;

  /// Every video with `duration` strictly below the threshold.
  async fn find_by_duration_less_than(&self, duration: i64) -> Result<Vec<Video>, CatalogError>;

  /// Highest assigned id, 0 when the catalog is empty. Seeds the allocator.
  async fn last_id(&self) -> Result<i64, CatalogError>;

  async fn like(&self, id: i64, user: &str) -> Result<(), CatalogError>;

  async fn unlike(&self, id: i64, user: &str) -> Result<(), CatalogError>;

  async fn likers(&self, id: i64) -> Result<Vec<String>, CatalogError>;
}

/// Monotonic id source for new videos. Ids start at 1; 0 marks "not yet
/// assigned" on the wire and is never handed out.
#[derive(Debug)]
pub struct IdAllocator(AtomicI64);

impl IdAllocator {
  pub fn starting_after(last: i64) -> IdAllocator {
    IdAllocator(AtomicI64::new(last))
  }

  pub fn next_id(&self) -> i64 {
    self.0.fetch_add(1, Ordering::Relaxed) + 1
  }
}

#[cfg(test)]
mod tests {
  use std::{collections::HashSet, sync::Arc};

  use super::*;

  #[test]
  fn allocator_never_repeats_and_never_returns_zero() {
    let ids = Arc::new(IdAllocator::starting_after(0));

    let handles: Vec<_> = (0..8)
      .map(|_| {
        let ids = Arc::clone(&ids);
        std::thread::spawn(move || (0..1000).map(|_| ids.next_id()).collect::<Vec<_>>())
      })
      .collect();

    let mut seen = HashSet::new();
    for handle in handles {
      for id in handle.join().unwrap() {
        assert!(id > 0);
        assert!(seen.insert(id), "id {id} handed out twice");
      }
    }
    assert_eq!(seen.len(), 8000);
  }

  #[test]
  fn allocator_resumes_after_seed() {
    let ids = IdAllocator::starting_after(41);
    assert_eq!(ids.next_id(), 42);
    assert_eq!(ids.next_id(), 43);
  }
}
