use std::path::PathBuf;

use clap::Args;

/// Flags shared by the gateway and worker binaries. Flatten into the binary's own `Cli`.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}
