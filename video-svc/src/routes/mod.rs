mod video_create;
mod video_data;
mod video_like;
mod video_list;
mod video_search;

pub use video_create::*;
pub use video_data::*;
pub use video_like::*;
pub use video_list::*;
pub use video_search::*;

use std::sync::Arc;

use axum::{
  routing::{get, post},
  Router,
};
use indoc::concatdoc;
use tower_http::compression::CompressionLayer;

use crate::state::App;

/// Prelude for `routes` mod
mod prelude {
  pub use axum::{extract::Path, Json};
  pub use http::StatusCode;
  pub use log::{debug, error, info, warn};
  pub use serde::{Deserialize, Serialize};

  pub use crate::{app_err, data::*, error::*, layer::*, state::*};
}

pub fn router(app: Arc<App>) -> Router {
  Router::new()
    .route("/", get(root))
    .route("/video", get(video_list).post(video_create))
    .route("/video/:id", get(video_get))
    .route(
      "/video/:id/data",
      get(video_data_download).post(video_data_upload),
    )
    .route("/video/:id/like", post(video_like))
    .route("/video/:id/unlike", post(video_unlike))
    .route("/video/:id/likedby", get(video_likedby))
    .route("/video/search/findByName", get(video_search_by_title))
    .route(
      "/video/search/findByDurationLessThan",
      get(video_search_by_duration),
    )
    .layer(CompressionLayer::new())
    .with_state(app)
}

async fn root() -> &'static str {
  concatdoc! {"
      Welcome! video-svc api v", env!("CARGO_PKG_VERSION")
  }
}
