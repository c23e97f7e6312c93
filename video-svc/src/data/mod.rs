use serde::{Deserialize, Serialize};

mod common;

pub use common::*;

/// One catalog entry. `id`, `likes`, `liked_by` and `data_url` are
/// server-owned; whatever a client sends for them on create is discarded,
/// except a nonzero `id` which is honored as an externally generated one.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Video {
  #[serde(default)]
  pub id: i64,
  pub title: String,
  #[serde(default)]
  pub duration: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data_url: Option<String>,
  #[serde(default)]
  pub likes: i64,
  #[serde(default)]
  pub liked_by: Vec<String>,
}

/// Outcome of a media upload. Only `Ready` is produced today; the other
/// states are reserved.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum VideoState {
  Processing,
  Ready,
  Failed,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct VideoStatus {
  pub state: VideoState,
}

impl VideoStatus {
  pub fn ready() -> VideoStatus {
    VideoStatus {
      state: VideoState::Ready,
    }
  }
}
