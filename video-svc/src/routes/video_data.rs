use axum::{
  body::StreamBody,
  extract::Multipart,
  response::IntoResponse,
};
use http::header;
use tokio_util::io::ReaderStream;

use super::prelude::*;

pub const DATA_PART: &str = "data";

/// POST /video/{id}/data
///
/// Multipart upload with the payload in the `data` part. The id must
/// already exist in the catalog; unknown ids never reach the blob store.
pub async fn video_data_upload(
  state: AppState,
  Path(id): Path<i64>,
  mut multipart: Multipart,
) -> AppResult<Json<VideoStatus>> {
  state.catalog.find_by_id(id).await?;

  let mut payload = None;
  while let Some(field) = multipart.next_field().await.map_err(|err| {
    app_err!(
      StatusCode::BAD_REQUEST,
      RespCode::INVALID_PARAMS,
      "Malformed multipart body: {err}"
    )
  })? {
    if field.name() == Some(DATA_PART) {
      let bytes = field.bytes().await.map_err(|err| {
        app_err!(
          StatusCode::BAD_REQUEST,
          RespCode::INVALID_PARAMS,
          "Failed to read multipart part `{DATA_PART}`: {err}"
        )
      })?;
      payload = Some(bytes);
      break;
    }
  }

  let Some(payload) = payload else {
    return Err(app_err!(
      StatusCode::BAD_REQUEST,
      RespCode::INVALID_PARAMS,
      "Multipart part `{DATA_PART}` is missing"
    ));
  };

  state.blob.put(id, &payload).await?;
  info!("Stored {} payload bytes for video {}", payload.len(), id);
  Ok(Json(VideoStatus::ready()))
}

/// GET /video/{id}/data
///
/// Streams the stored payload in full; 404 when the id is unknown or no
/// payload was ever attached. The file handle rides inside the response
/// stream and closes on every exit path.
pub async fn video_data_download(
  state: AppState,
  Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
  state.catalog.find_by_id(id).await?;
  let file = state.blob.get(id).await?;

  Ok((
    [(header::CONTENT_TYPE, "application/octet-stream")],
    StreamBody::new(ReaderStream::new(file)),
  ))
}
