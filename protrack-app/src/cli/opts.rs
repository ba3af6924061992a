use clap::{builder::BoolishValueParser, ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "protrack-settings", version, about = "ProTrack application settings")]
pub struct Cli {
    /// Installation directory; `data/` beneath it holds application.properties
    /// (defaults to the directory of this executable)
    #[arg(long, global = true, env = "PROTRACK_INSTALL_ROOT")]
    pub install_root: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `protrack_properties=trace`
    #[arg(long, global = true, env = "PROTRACK_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print whether data is stored in the application directory
    Get,
    /// Store data in the application directory (true) or the user profile (false)
    Set {
        #[arg(value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
        value: bool,
    },
    /// Print the effective data directory
    DataDir,
    /// Print the flag, both candidate directories and storage availability
    Show {
        #[arg(long)]
        json: bool,
    },
}
