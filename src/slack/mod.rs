//! All Slack Web API functionality

pub mod api;
pub mod client;
pub mod dispatch;
pub mod envelope;
pub mod models;
pub mod params;
pub mod payload;
pub mod responses;
pub mod session;
pub mod transport;
pub mod upload;

// Re-export main types for convenience
pub use client::SlackClient;
pub use envelope::{Ack, Decoder, Response, decode};
pub use params::{BoolFormat, FileType, Params};
pub use session::Session;
pub use transport::{FormPart, HttpTransport, Transport};
pub use upload::{UploadOutcome, UploadRequest, UploadStage};
