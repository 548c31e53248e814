use axum::async_trait;

use crate::domain::Point;

pub mod influx;

pub use influx::InfluxClient;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

pub trait TimeSeriesStore: Send + Sync {
    fn write_api(&self, org: &str, bucket: &str) -> Box<dyn WriteApi>;
}

#[async_trait]
pub trait WriteApi: Send {
    /// Stamps the current time on points without one.
    fn write_point(&mut self, point: Point);

    /// Drains the buffer even on failure.
    async fn flush(&mut self) -> Result<(), StoreError>;
}
