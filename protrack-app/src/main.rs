mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    // Best effort: an unusable settings file must not stop the caller.
    let store = protrack_properties::bootstrap(args.install_root.clone());
    run_cli(&store, args.cmd, &mut std::io::stdout().lock())
}

fn init_tracing(filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
