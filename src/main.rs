//! govdash - open-data publications per German federal ministry, from GovData

use clap::Parser;

mod cli;
mod client;
mod config;
mod dashboard;
mod error;
mod hierarchy;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Dashboard { output } => cli::dashboard::run(&opts, output.as_deref()).await,
        Commands::Departments { subordinates } => cli::departments::run(&opts, subordinates),
        Commands::Resolve { name } => cli::resolve::run(&opts, &name),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("govdash version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}

/// Log to stderr; RUST_LOG takes precedence over the --debug flag.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
    log::debug!("Debug logging enabled");
}
