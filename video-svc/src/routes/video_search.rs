use axum::extract::Query;

use super::prelude::*;

#[derive(Deserialize, Debug)]
pub struct TitleQuery {
  pub title: String,
}

#[derive(Deserialize, Debug)]
pub struct DurationQuery {
  pub duration: i64,
}

/// GET /video/search/findByName?title=
pub async fn video_search_by_title(
  state: AppState,
  Query(query): Query<TitleQuery>,
) -> AppResult<Json<Vec<Video>>> {
  Ok(Json(state.catalog.find_by_title(&query.title).await?))
}

/// GET /video/search/findByDurationLessThan?duration=
pub async fn video_search_by_duration(
  state: AppState,
  Query(query): Query<DurationQuery>,
) -> AppResult<Json<Vec<Video>>> {
  Ok(Json(
    state.catalog.find_by_duration_less_than(query.duration).await?,
  ))
}
