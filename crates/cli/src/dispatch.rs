//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Treat a missing subcommand as `run` with no filters.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use grafana_client::GrafanaClient;

use crate::args::{Cli, Commands, SearchArgs};
use crate::cancellation::CancellationToken;
use crate::commands;

pub(crate) async fn run_command(
    cli: Cli,
    client: &GrafanaClient,
    cancel: &CancellationToken,
) -> Result<()> {
    let checkpoint = cli.checkpoint_file.as_path();

    match cli.command {
        None => {
            commands::run::run(client, &SearchArgs::default(), checkpoint, false, cancel).await?;
        }
        Some(Commands::Run { search, dry_run }) => {
            commands::run::run(client, &search, checkpoint, dry_run, cancel).await?;
        }
        Some(Commands::Discover { search }) => {
            commands::discover::run(client, &search, checkpoint, cancel).await?;
        }
        Some(Commands::Remediate { from, dry_run }) => {
            let source = from.as_deref().unwrap_or(checkpoint);
            commands::remediate::run(client, source, checkpoint, dry_run, cancel).await?;
        }
    }

    Ok(())
}
