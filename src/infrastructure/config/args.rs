use std::path::PathBuf;

use clap::Args;

use super::app_config::LogLevel;

/// Global command-line flags, shared by every subcommand.
#[derive(Debug, Args)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the portal backend API.
    #[arg(long, value_name = "URL", env = "RATIONDESK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Do not persist the session to the system keyring.
    #[arg(long, global = true)]
    pub no_store: bool,
}
