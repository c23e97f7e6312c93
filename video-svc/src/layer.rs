use axum::{
  async_trait,
  extract::FromRequestParts,
  response::{IntoResponse, Response},
};
use http::{request::Parts, StatusCode};

pub const CALLER_HEADER: &str = "x-user";

/// Caller identity resolved by the upstream authentication collaborator and
/// forwarded as a plain header. Only a stable, comparable string is required
/// here; no credential checking happens in this service.
#[derive(Clone, Debug)]
pub struct Caller(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
  S: Send + Sync,
{
  type Rejection = Response;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    let user = parts
      .headers
      .get(CALLER_HEADER)
      .and_then(|value| value.to_str().ok())
      .filter(|user| !user.is_empty());

    let Some(user) = user else {
      return Err(
        (
          StatusCode::BAD_REQUEST,
          format!("header `{CALLER_HEADER}` does not exist or malformed"),
        )
          .into_response(),
      );
    };

    Ok(Caller(user.to_string()))
  }
}
