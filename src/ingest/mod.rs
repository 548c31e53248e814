pub mod error;
pub mod handler;
pub mod types;

pub use error::IngestError;
pub use handler::submit;
