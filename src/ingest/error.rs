use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::ingest::types::ErrorBody;
use crate::store::StoreError;

pub const INVALID_INPUT: &str = "Invalid input data";
pub const WRITE_FAILED: &str = "Error writing data to InfluxDB";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid input data: {0}")]
    InvalidInput(&'static str),

    #[error("error writing data to influxdb: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        // store detail stays in the logs
        let (status, error) = match self {
            IngestError::InvalidInput(_) => (StatusCode::BAD_REQUEST, INVALID_INPUT),
            IngestError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, WRITE_FAILED),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
