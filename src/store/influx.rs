use axum::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use time::OffsetDateTime;
use tracing::debug;

use crate::config::InfluxCfg;
use crate::domain::Point;
use crate::store::{StoreError, TimeSeriesStore, WriteApi};

/// InfluxDB v2 client. Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct InfluxClient {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl InfluxClient {
    pub fn new(url: &str, token: &str, timeout: Duration) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("weather-ingest/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn from_cfg(cfg: &InfluxCfg) -> Result<Self, StoreError> {
        Self::new(&cfg.url, &cfg.token, Duration::from_millis(cfg.timeout_ms))
    }

    fn write_url(&self) -> String {
        format!("{}/api/v2/write", self.url)
    }
}

impl TimeSeriesStore for InfluxClient {
    fn write_api(&self, org: &str, bucket: &str) -> Box<dyn WriteApi> {
        Box::new(InfluxWriteApi {
            client: self.clone(),
            org: org.to_string(),
            bucket: bucket.to_string(),
            buffer: Vec::new(),
        })
    }
}

pub struct InfluxWriteApi {
    client: InfluxClient,
    org: String,
    bucket: String,
    buffer: Vec<Point>,
}

#[async_trait]
impl WriteApi for InfluxWriteApi {
    fn write_point(&mut self, point: Point) {
        self.buffer.push(point.or_timestamp(OffsetDateTime::now_utc()));
    }

    async fn flush(&mut self) -> Result<(), StoreError> {
        let points = std::mem::take(&mut self.buffer);
        if points.is_empty() {
            return Ok(());
        }

        let body = points
            .iter()
            .map(Point::to_line_protocol)
            .collect::<Vec<_>>()
            .join("\n");

        let resp = self
            .client
            .http
            .post(self.client.write_url())
            .query(&[
                ("org", self.org.as_str()),
                ("bucket", self.bucket.as_str()),
                ("precision", "ns"),
            ])
            .header(AUTHORIZATION, format!("Token {}", self.client.token))
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            debug!(points = points.len(), bucket = %self.bucket, "flushed");
            return Ok(());
        }

        let body = resp.text().await?;
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
