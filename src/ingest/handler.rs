use crate::app::AppState;
use crate::ingest::error::IngestError;
use crate::ingest::types::{reading_from_body, MessageBody};

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::{debug, error, info};

const WRITTEN: &str = "Data written successfully";

/// `POST /data`: validates one reading, writes it as a point and flushes
/// before answering.
pub async fn submit(
    State(st): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<MessageBody>, IngestError> {
    let reading = reading_from_body(&body).map_err(|reason| {
        debug!(reason, "rejected reading");
        IngestError::InvalidInput(reason)
    })?;

    let influx = &st.cfg.influx;
    let mut write = st.store.write_api(&influx.org, &influx.bucket);
    write.write_point(reading.to_point());

    if let Err(err) = write.flush().await {
        error!(error = %err, location = %reading.location, "error writing data to influxdb");
        return Err(err.into());
    }

    info!(location = %reading.location, "data written to influxdb");
    Ok(Json(MessageBody { message: WRITTEN }))
}
