//! Request handlers.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::{ApiError, NOT_FOUND_BODY};
use crate::AppState;

pub const USAGE: &str = "\
Barcode Server
A library to generate barcodes & qrcodes using http requests

GET /generate/<mode>/<size>?data=<data>

mode  - barcode mode (one of: ean, code39, code93, code128, aztec, qr)
size  - output image size in pixels, as <width>x<height>
data  - data to encode
";

/// First `data` value of the query string; absent means empty.
///
/// Later repeats of `data` are ignored.
pub fn payload_from_query(pairs: Vec<(String, String)>) -> String {
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "data").then_some(value))
        .unwrap_or_default()
}

pub async fn index() -> &'static str {
    USAGE
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Render a barcode as PNG.
///
/// The pipeline is CPU-bound and runs on the blocking pool. If the client
/// disconnects the pipeline still runs to completion.
pub async fn generate(
    State(state): State<AppState>,
    Path((symbology, size)): Path<(String, String)>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let payload = payload_from_query(pairs);
    log::debug!(
        "generate symbology={symbology} size={size} payload_len={}",
        payload.len()
    );

    let options = state.options;
    let png = tokio::task::spawn_blocking(move || {
        barcode_core::generate(&symbology, &payload, &size, &options)
    })
    .await??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
