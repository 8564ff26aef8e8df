use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use policy_search::{load_store, search, CorpusStore};

mod cli;
use cli::{display, Cli, Commands, StoreArgs};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries results only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            query,
            domain,
            top_k,
            json,
            store,
        } => {
            let corpora = open_store(&store)?;
            let results = search(&corpora, &query, &domain, top_k)
                .with_context(|| format!("search in domain '{}' failed", domain))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_results(&query, &domain, &results);
            }
        }
        Commands::Inspect { store } => {
            let corpora = open_store(&store)?;
            display::print_inspect(&store.artifacts, &corpora);
        }
    }
    Ok(())
}

fn open_store(args: &StoreArgs) -> Result<CorpusStore> {
    let store = load_store(&args.artifacts)
        .with_context(|| format!("failed to load artifacts from {}", args.artifacts.display()))?;
    Ok(match args.fallback_domain {
        Some(domain) => store.with_fallback(Some(domain)),
        None => store,
    })
}
