//! HTTP ingestion of weather readings into InfluxDB.
//!
//! `POST /data` takes `{"location", "temperature", "humidity"}`, writes one
//! `weather` point tagged with the location and flushes it before replying.

pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod ingest;
pub mod logging;
pub mod store;
