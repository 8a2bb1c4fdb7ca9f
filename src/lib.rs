/// slackapi - a typed client for the Slack Web API.
///
/// Every Slack method is a named remote procedure: the client assembles the method's
/// parameters, calls it over HTTP, and decodes the `{"ok": .., "error": ..}` envelope into
/// a typed [`slack::Response`]. On top of that single request path sits the four-step
/// external file upload ([`slack::SlackClient::upload_file`]).
///
/// # Architecture
///
/// - `slack::params` / `slack::payload`: pure parameter assembly and JSON payload encoding
/// - `slack::transport`: reqwest GET / multipart POST behind the `Transport` trait
/// - `slack::envelope`: response decoding
/// - `slack::api`: per-method wrappers
/// - `slack::upload`: the upload state machine
/// - `slack::session`: the handshake snapshot of users and conversations
///
/// # Example
///
/// ```no_run
/// use slackapi::core::config::ClientConfig;
/// use slackapi::slack::{SlackClient, UploadRequest};
/// use slackapi::slack::api::PostMessageRequest;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     slackapi::setup_logging();
///
///     let config = ClientConfig::from_env()?;
///     let client = SlackClient::from_config(&config);
///
///     let posted = client
///         .post_message(&PostMessageRequest::new("C12345678", "Nightly build is green"))
///         .await?
///         .into_result()?;
///
///     let upload = UploadRequest::new("build.log", b"all tests passed".to_vec())
///         .to_channels(["C12345678"])
///         .in_thread(posted.ts);
///     let uploaded = client.upload_file(upload).await?.into_result()?;
///     println!("uploaded {}", uploaded.file.id);
///
///     Ok(())
/// }
/// ```
pub mod core;
pub mod errors;
pub mod slack;
pub mod utils;

/// Configure structured logging with JSON output.
///
/// Installs a tracing-subscriber JSON formatter with targets. Safe to call more than
/// once; only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// slackapi::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    #[cfg(feature = "debug-logs")]
    let level = tracing_subscriber::filter::LevelFilter::DEBUG;
    #[cfg(not(feature = "debug-logs"))]
    let level = tracing_subscriber::filter::LevelFilter::INFO;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_filter(level);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
