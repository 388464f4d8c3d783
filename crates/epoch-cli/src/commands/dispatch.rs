use epoch_config::EpochConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &EpochConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Click(args) => super::click::handle(&args, config, flags).await,
        Commands::Year { action } => super::year::handle(&action, flags),
        Commands::Range { action } => super::range::handle(&action, config, flags),
    }
}
