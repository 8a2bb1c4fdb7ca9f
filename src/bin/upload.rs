//! `slack-upload`: share a local file to one or more Slack conversations.
//!
//! ```text
//! slack-upload <file> <channel>... [--title T] [--comment C] [--thread TS]
//! ```
//!
//! Reads `SLACK_API_TOKEN` (and optionally `SLACK_API_BASE_URL`,
//! `SLACK_HTTP_TIMEOUT_SECS`) from the environment.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use slackapi::core::config::ClientConfig;
use slackapi::slack::{SlackClient, UploadOutcome, UploadRequest};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "slack-upload")]
#[command(about = "Share a local file to Slack conversations")]
#[command(version)]
struct Args {
    /// File to upload
    path: PathBuf,

    /// Conversations to share the file to; none keeps it private
    channels: Vec<String>,

    /// File title (defaults to the file name)
    #[arg(long)]
    title: Option<String>,

    /// Message posted along with the file
    #[arg(long)]
    comment: Option<String>,

    /// Share as a reply in this thread
    #[arg(long = "thread")]
    thread_ts: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    slackapi::setup_logging();

    let args = Args::parse();
    let config = ClientConfig::from_env()?;
    let client = SlackClient::from_config(&config);

    let bytes = tokio::fs::read(&args.path)
        .await
        .with_context(|| format!("reading {}", args.path.display()))?;
    let file_name = args
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("file path has no file name")?;

    let mut request = UploadRequest::new(file_name, bytes).to_channels(args.channels);
    request.title = args.title;
    request.initial_comment = args.comment;
    request.thread_ts = args.thread_ts;

    match client.upload_file(request).await? {
        UploadOutcome::Done(response) => {
            let upload = response.into_result()?;
            println!(
                "{}\t{}",
                upload.file.id,
                upload.file.permalink.as_deref().unwrap_or("-")
            );
            Ok(())
        }
        UploadOutcome::Aborted { stage, error } => {
            error!(%stage, error = %error, "upload failed");
            bail!("upload aborted while {stage}: {error}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_and_flags() {
        let args = Args::try_parse_from([
            "slack-upload",
            "report.pdf",
            "C1",
            "C2",
            "--title",
            "Q3 report",
            "--thread",
            "1503435956.000247",
        ])
        .unwrap();
        assert_eq!(args.path, PathBuf::from("report.pdf"));
        assert_eq!(args.channels, vec!["C1", "C2"]);
        assert_eq!(args.title.as_deref(), Some("Q3 report"));
        assert_eq!(args.thread_ts.as_deref(), Some("1503435956.000247"));
        assert!(args.comment.is_none());
    }

    #[test]
    fn test_no_channels_is_allowed() {
        let args = Args::try_parse_from(["slack-upload", "notes.txt"]).unwrap();
        assert!(args.channels.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Args::try_parse_from(["slack-upload"]).is_err());
    }

    #[test]
    fn test_flag_without_value_is_an_error() {
        assert!(Args::try_parse_from(["slack-upload", "a.txt", "--comment"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(Args::try_parse_from(["slack-upload", "a.txt", "--force"]).is_err());
    }
}
