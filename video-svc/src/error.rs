use std::{fmt::Display, ops::Deref};

use axum::{response::IntoResponse, Json};
use http::StatusCode;

use crate::{
  blob::BlobError,
  catalog::CatalogError,
  data::{ErrorBody, RespCode},
};

pub type AppResult<T, E = AnyhowWrapper> = Result<T, E>;

#[repr(transparent)]
#[must_use]
pub struct AnyhowWrapper(pub anyhow::Error);

impl From<anyhow::Error> for AnyhowWrapper {
  fn from(value: anyhow::Error) -> Self {
    AnyhowWrapper(value)
  }
}

impl From<AnyhowWrapper> for anyhow::Error {
  fn from(val: AnyhowWrapper) -> Self {
    val.0
  }
}

impl Deref for AnyhowWrapper {
  type Target = anyhow::Error;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl IntoResponse for AnyhowWrapper {
  fn into_response(self) -> axum::response::Response {
    let Some(app_error) = self.0.downcast_ref::<AppError>() else {
      log::error!("Unexpected Error: {:?}", self.0);
      let body = ErrorBody::new(RespCode::UNKNOWN, "UNKNOWN".to_string());
      return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
    };

    if app_error.http_code.is_server_error() {
      log::error!("Unexpected Error: {:?}", self.0);
    }

    let body = ErrorBody::new(app_error.resp_code, format!("{:?}", self.0));
    (app_error.http_code, Json(body)).into_response()
  }
}

#[derive(thiserror::Error, Debug)]
pub struct AppError {
  pub http_code: StatusCode,
  pub resp_code: RespCode,
}

impl Display for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.resp_code.describe().unwrap_or("Unknown"))
  }
}

impl Default for AppError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl AppError {
  pub fn new() -> AppError {
    AppError {
      http_code: StatusCode::INTERNAL_SERVER_ERROR,
      resp_code: RespCode::UNKNOWN,
    }
  }

  #[inline]
  pub fn http_code(mut self, code: StatusCode) -> Self {
    self.http_code = code;
    self
  }

  #[inline]
  pub fn resp_code(mut self, code: RespCode) -> Self {
    self.resp_code = code;
    self
  }
}

impl From<CatalogError> for AnyhowWrapper {
  fn from(err: CatalogError) -> Self {
    let (http_code, resp_code) = match &err {
      CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, RespCode::VIDEO_NOT_FOUND),
      CatalogError::AlreadyLiked { .. } => (StatusCode::BAD_REQUEST, RespCode::ALREADY_LIKED),
      CatalogError::NotLiked { .. } => (StatusCode::BAD_REQUEST, RespCode::NOT_LIKED),
      CatalogError::Database(_) | CatalogError::Pool(_) => {
        (StatusCode::INTERNAL_SERVER_ERROR, RespCode::DATABASE_ERROR)
      },
    };

    AnyhowWrapper(
      anyhow::Error::new(err).context(AppError::new().http_code(http_code).resp_code(resp_code)),
    )
  }
}

impl From<BlobError> for AnyhowWrapper {
  fn from(err: BlobError) -> Self {
    // Storage failures surface as 404 like unknown ids; the real cause only
    // goes to the log.
    if let BlobError::Io { id, source } = &err {
      log::error!("Blob I/O failure for video {}: {:?}", id, source);
    }

    AnyhowWrapper(
      anyhow::Error::new(err).context(
        AppError::new()
          .http_code(StatusCode::NOT_FOUND)
          .resp_code(RespCode::DATA_NOT_FOUND),
      ),
    )
  }
}
