use super::prelude::*;

pub async fn video_list(state: AppState) -> AppResult<Json<Vec<Video>>> {
  Ok(Json(state.catalog.find_all().await?))
}

pub async fn video_get(state: AppState, Path(id): Path<i64>) -> AppResult<Json<Video>> {
  Ok(Json(state.catalog.find_by_id(id).await?))
}
