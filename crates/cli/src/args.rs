//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map search filter flags onto [`SearchCriteria`].
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate connection settings (see `grafana_config::ConfigLoader`).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use grafana_client::SearchCriteria;
use grafana_config::constants::{
    DEFAULT_CHECKPOINT_FILE, ENV_API_TOKEN, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_SKIP_VERIFY,
    ENV_TIMEOUT,
};

#[derive(Parser)]
#[command(name = "exemplar-cli")]
#[command(
    about = "Find Grafana dashboards with exemplar queries enabled and disable them",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  exemplar-cli --url https://grafana.example.com --api-token $TOKEN\n  exemplar-cli discover --tag prod --folder-uid infra\n  exemplar-cli remediate --dry-run\n  exemplar-cli remediate --from exemplar-dashboards-failed-transactions\n"
)]
pub struct Cli {
    /// Base URL of the Grafana instance (e.g., https://grafana.example.com)
    #[arg(short, long, global = true, env = ENV_BASE_URL)]
    pub url: Option<String>,

    /// Service account token with dashboard read and write permissions
    #[arg(short, long, global = true, env = ENV_API_TOKEN, hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = ENV_TIMEOUT)]
    pub timeout: Option<u64>,

    /// Maximum number of retries for transient failures
    #[arg(long, global = true, env = ENV_MAX_RETRIES)]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = ENV_SKIP_VERIFY)]
    pub skip_verify: bool,

    /// Checkpoint file holding the UIDs found by discovery.
    ///
    /// Failures are written next to it with a `-failed-transactions` suffix.
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_CHECKPOINT_FILE)]
    pub checkpoint_file: PathBuf,

    /// Log line format written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Defaults to `run` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover affected dashboards, checkpoint them, then disable exemplars
    Run {
        #[command(flatten)]
        search: SearchArgs,

        /// Fetch and rewrite dashboards without saving them
        #[arg(long)]
        dry_run: bool,
    },

    /// Discover affected dashboards and write the checkpoint file only
    Discover {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Disable exemplars in the dashboards listed in a checkpoint file
    Remediate {
        /// UID list to process instead of the checkpoint file
        /// (e.g. a failure file from an earlier run)
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,

        /// Fetch and rewrite dashboards without saving them
        #[arg(long)]
        dry_run: bool,
    },
}

/// Filters that narrow which dashboards discovery scans.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Only dashboards whose title matches this query
    #[arg(long)]
    pub query: Option<String>,

    /// Only dashboards carrying this tag (repeatable; all must match)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only dashboards in this folder (repeatable)
    #[arg(long = "folder-uid", value_name = "UID")]
    pub folder_uids: Vec<String>,
}

impl SearchArgs {
    /// Criteria for the platform search; blank queries are dropped.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: self
                .query
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(String::from),
            tags: self.tags.clone(),
            folder_uids: self.folder_uids.clone(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
