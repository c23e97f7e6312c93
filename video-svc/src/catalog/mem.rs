use async_trait::async_trait;
use dashmap::DashMap;

use super::{Catalog, CatalogError};
use crate::data::Video;

/// Process-local catalog. Nothing survives a restart; entries live until
/// shutdown since there is no delete operation.
#[derive(Debug, Default)]
pub struct MemCatalog {
  videos: DashMap<i64, Video>,
}

impl MemCatalog {
  pub fn new() -> MemCatalog {
    Default::default()
  }
}

#[async_trait]
impl Catalog for MemCatalog {
  async fn insert(&self, video: Video) -> Result<Video, CatalogError> {
    self.videos.insert(video.id, video.clone());
    Ok(video)
  }

  async fn find_all(&self) -> Result<Vec<Video>, CatalogError> {
    Ok(self.videos.iter().map(|entry| entry.value().clone()).collect())
  }

  async fn find_by_id(&self, id: i64) -> Result<Video, CatalogError> {
    self
      .videos
      .get(&id)
      .map(|entry| entry.value().clone())
      .ok_or(CatalogError::NotFound(id))
  }

  async fn find_by_title(&self, title: &str) -> Result<Vec<Video>, CatalogError> {
    Ok(
      self
        .videos
        .iter()
        .filter(|entry| entry.value().title == title)
        .map(|entry| entry.value().clone())
        .collect(),
    )
  }

  async fn find_by_duration_less_than(&self, duration: i64) -> Result<Vec<Video>, CatalogError> {
    Ok(
      self
        .videos
        .iter()
        .filter(|entry| entry.value().duration < duration)
        .map(|entry| entry.value().clone())
        .collect(),
    )
  }

  async fn last_id(&self) -> Result<i64, CatalogError> {
    Ok(self.videos.iter().map(|entry| *entry.key()).max().unwrap_or(0))
  }

  async fn like(&self, id: i64, user: &str) -> Result<(), CatalogError> {
    // The entry write guard stays held across check and mutation, so
    // concurrent likes for one video serialize here.
    let mut video = self.videos.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
    if video.liked_by.iter().any(|liker| liker == user) {
      return Err(CatalogError::AlreadyLiked {
        id,
        user: user.to_string(),
      });
    }
    video.likes += 1;
    video.liked_by.push(user.to_string());
    Ok(())
  }

  async fn unlike(&self, id: i64, user: &str) -> Result<(), CatalogError> {
    let mut video = self.videos.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
    let Some(pos) = video.liked_by.iter().position(|liker| liker == user) else {
      return Err(CatalogError::NotLiked {
        id,
        user: user.to_string(),
      });
    };
    video.likes -= 1;
    video.liked_by.remove(pos);
    Ok(())
  }

  async fn likers(&self, id: i64) -> Result<Vec<String>, CatalogError> {
    self
      .videos
      .get(&id)
      .map(|entry| entry.value().liked_by.clone())
      .ok_or(CatalogError::NotFound(id))
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;

  fn video(id: i64, title: &str, duration: i64) -> Video {
    Video {
      id,
      title: title.to_string(),
      duration,
      data_url: None,
      likes: 0,
      liked_by: Vec::new(),
    }
  }

  #[tokio::test]
  async fn like_and_unlike_keep_counter_and_set_in_sync() {
    let catalog = MemCatalog::new();
    catalog.insert(video(1, "Dogs", 120)).await.unwrap();

    catalog.like(1, "alice").await.unwrap();
    let stored = catalog.find_by_id(1).await.unwrap();
    assert_eq!(stored.likes, 1);
    assert_eq!(stored.liked_by, vec!["alice".to_string()]);
    assert_eq!(stored.likes, stored.liked_by.len() as i64);

    // A second like by the same user fails and mutates nothing
    assert!(matches!(
      catalog.like(1, "alice").await,
      Err(CatalogError::AlreadyLiked { .. })
    ));
    let stored = catalog.find_by_id(1).await.unwrap();
    assert_eq!(stored.likes, 1);

    // Unlike by a user who never liked fails too
    assert!(matches!(
      catalog.unlike(1, "bob").await,
      Err(CatalogError::NotLiked { .. })
    ));

    catalog.unlike(1, "alice").await.unwrap();
    let stored = catalog.find_by_id(1).await.unwrap();
    assert_eq!(stored.likes, 0);
    assert!(stored.liked_by.is_empty());

    assert!(matches!(
      catalog.unlike(1, "alice").await,
      Err(CatalogError::NotLiked { .. })
    ));
  }

  #[tokio::test]
  async fn reactions_on_unknown_video_fail_with_not_found() {
    let catalog = MemCatalog::new();
    assert!(matches!(
      catalog.like(999, "alice").await,
      Err(CatalogError::NotFound(999))
    ));
    assert!(matches!(
      catalog.unlike(999, "alice").await,
      Err(CatalogError::NotFound(999))
    ));
    assert!(matches!(
      catalog.likers(999).await,
      Err(CatalogError::NotFound(999))
    ));
    assert!(matches!(
      catalog.find_by_id(999).await,
      Err(CatalogError::NotFound(999))
    ));
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
  async fn concurrent_likes_by_one_user_count_once() {
    let catalog = Arc::new(MemCatalog::new());
    catalog.insert(video(1, "Dogs", 120)).await.unwrap();

    let tasks: Vec<_> = (0..16)
      .map(|_| {
        let catalog = Arc::clone(&catalog);
        tokio::spawn(async move { catalog.like(1, "alice").await.is_ok() })
      })
      .collect();

    let mut successes = 0;
    for task in tasks {
      if task.await.unwrap() {
        successes += 1;
      }
    }

    assert_eq!(successes, 1);
    let stored = catalog.find_by_id(1).await.unwrap();
    assert_eq!(stored.likes, 1);
    assert_eq!(stored.liked_by, vec!["alice".to_string()]);
  }

  #[tokio::test]
  async fn duration_filter_is_strictly_less_than() {
    let catalog = MemCatalog::new();
    catalog.insert(video(1, "Dogs", 120)).await.unwrap();
    catalog.insert(video(2, "Cats", 90)).await.unwrap();

    assert!(catalog.find_by_duration_less_than(0).await.unwrap().is_empty());

    let below_max = catalog.find_by_duration_less_than(120).await.unwrap();
    assert_eq!(below_max.len(), 1);
    assert_eq!(below_max[0].id, 2);

    assert_eq!(catalog.find_by_duration_less_than(121).await.unwrap().len(), 2);
  }

  #[tokio::test]
  async fn title_search_is_exact_match() {
    let catalog = MemCatalog::new();
    catalog.insert(video(1, "Dogs", 120)).await.unwrap();
    catalog.insert(video(2, "Cats", 90)).await.unwrap();

    let dogs = catalog.find_by_title("Dogs").await.unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].id, 1);

    assert!(catalog.find_by_title("Fish").await.unwrap().is_empty());
    assert!(catalog.find_by_title("dogs").await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn last_id_tracks_highest_insert() {
    let catalog = MemCatalog::new();
    assert_eq!(catalog.last_id().await.unwrap(), 0);
    catalog.insert(video(3, "Dogs", 120)).await.unwrap();
    catalog.insert(video(7, "Cats", 90)).await.unwrap();
    assert_eq!(catalog.last_id().await.unwrap(), 7);
  }
}
