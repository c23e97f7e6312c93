use axum::extract::Host;

use super::prelude::*;

/// POST /video
///
/// Client-supplied metadata minus the server-owned fields. A nonzero id is
/// accepted as externally generated; id 0 (or absent) gets the next
/// allocator id. The advisory data url is attached before the record
/// becomes visible to anyone else.
pub async fn video_create(
  state: AppState,
  Host(host): Host,
  body: Json<Video>,
) -> AppResult<Json<Video>> {
  let mut video = body.0;
  if video.id == 0 {
    video.id = state.ids.next_id();
  }
  video.likes = 0;
  video.liked_by.clear();
  video.data_url = Some(state.data_url(&host, video.id));

  let stored = state.catalog.insert(video).await?;
  debug!("Created video {} `{}`", stored.id, stored.title);
  Ok(Json(stored))
}
