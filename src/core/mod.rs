pub mod config;
pub mod timestamp;

pub use config::ClientConfig;
pub use timestamp::Timestamp;
