//! dexview - terminal catalog viewer for PokeAPI with offline fallback data

use std::error::Error as _;

use clap::Parser;
use log::debug;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod index;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{CacheCommands, Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);

        let mut source = err.source();
        while let Some(cause) = source {
            debug!("Caused by: {}", cause);
            source = cause.source();
        }

        std::process::exit(1);
    }
}

/// `--debug` wins; otherwise RUST_LOG, otherwise warnings only
fn init_logging(debug: bool) {
    let default_filter = if debug { "dexview=debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if debug {
        builder.parse_filters(default_filter);
    }
    builder.format_timestamp_millis().init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::List(args) => cli::list::run(&opts, &args).await,
        Commands::Gallery { types, limit } => cli::gallery::run(&opts, &types, limit).await,
        Commands::Show { entry, ids } => cli::show::run(&opts, &entry, ids.as_deref()).await,
        Commands::Types => cli::types::run(&opts).await,
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::Clear => cli::cache::clear(&opts),
            CacheCommands::Path => cli::cache::path(&opts),
        },
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("dexview version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
