// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the policy-search command-line interface.
//!
//! Two subcommands: `search` runs one query against a loaded artifact
//! directory, `inspect` prints what the directory holds. Both load the full
//! store first, so a broken artifact fails the same way for either.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use policy_search::{Domain, DEFAULT_TOP_K};

#[derive(Parser)]
#[command(
    name = "policy-search",
    about = "Domain-scoped similarity search over policy documents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the corpora come from and how unknown selectors are routed.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Directory containing manifest.json and the corpus artifacts
    #[arg(long, env = "POLICY_SEARCH_ARTIFACTS", default_value = "artifacts")]
    pub artifacts: PathBuf,

    /// Send unknown domain selectors to this corpus instead of failing
    ///
    /// Overrides `fallbackDomain` from the manifest.
    #[arg(long)]
    pub fallback_domain: Option<Domain>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search one domain and display the best matches
    Search {
        /// Free-text query
        query: String,

        /// Corpus to search (health or education)
        #[arg(short, long)]
        domain: String,

        /// Number of results to return (must be positive)
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K as i64, allow_hyphen_values = true)]
        top_k: i64,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Show per-domain statistics for an artifact directory
    Inspect {
        #[command(flatten)]
        store: StoreArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "policy-search",
            "search",
            "universal coverage",
            "--domain",
            "health",
            "-k",
            "5",
            "--artifacts",
            "/tmp/a",
        ])
        .unwrap();
        match cli.command {
            Commands::Search {
                query,
                domain,
                top_k,
                json,
                store,
            } => {
                assert_eq!(query, "universal coverage");
                assert_eq!(domain, "health");
                assert_eq!(top_k, 5);
                assert!(!json);
                assert_eq!(store.artifacts, PathBuf::from("/tmp/a"));
                assert_eq!(store.fallback_domain, None);
            }
            Commands::Inspect { .. } => panic!("expected search"),
        }
    }

    #[test]
    fn test_negative_top_k_reaches_library() {
        let cli = Cli::try_parse_from([
            "policy-search", "search", "q", "--domain", "health", "--top-k", "-1",
        ])
        .unwrap();
        match cli.command {
            Commands::Search { top_k, .. } => assert_eq!(top_k, -1),
            Commands::Inspect { .. } => panic!("expected search"),
        }
    }

    #[test]
    fn test_fallback_domain_must_be_known() {
        assert!(Cli::try_parse_from([
            "policy-search", "inspect", "--fallback-domain", "finance",
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "policy-search", "inspect", "--fallback-domain", "education",
        ])
        .unwrap();
        match cli.command {
            Commands::Inspect { store } => {
                assert_eq!(store.fallback_domain, Some(Domain::Education))
            }
            Commands::Search { .. } => panic!("expected inspect"),
        }
    }
}
