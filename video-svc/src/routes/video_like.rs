use super::prelude::*;

/// POST /video/{id}/like
///
/// At most one like per (video, user); a repeat is a 400 and mutates
/// nothing. The backend serializes the check against the mutation, so two
/// racing likes by one user cannot both land.
pub async fn video_like(
  state: AppState,
  Path(id): Path<i64>,
  Caller(user): Caller,
) -> AppResult<StatusCode> {
  state.catalog.like(id, &user).await?;
  debug!("Video {} liked by `{}`", id, user);
  Ok(StatusCode::OK)
}

/// POST /video/{id}/unlike
pub async fn video_unlike(
  state: AppState,
  Path(id): Path<i64>,
  Caller(user): Caller,
) -> AppResult<StatusCode> {
  state.catalog.unlike(id, &user).await?;
  debug!("Video {} unliked by `{}`", id, user);
  Ok(StatusCode::OK)
}

/// GET /video/{id}/likedby
pub async fn video_likedby(state: AppState, Path(id): Path<i64>) -> AppResult<Json<Vec<String>>> {
  Ok(Json(state.catalog.likers(id).await?))
}
