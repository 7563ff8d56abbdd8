//! Command-line interface for kubeconfig-merge
//!
//! Accepts the three paths either positionally or as flags and runs the
//! load/merge/save pipeline once.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{resolve, PathSources};
use crate::merge::{CurrentContextPolicy, MergeOptions};
use crate::pipeline;

/// Merge two kubeconfig files; entries in the second file win on name collisions
#[derive(Parser)]
#[command(name = "kubeconfig-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the first kubeconfig file
    #[arg(value_name = "KUBECONFIG1")]
    first_path: Option<PathBuf>,

    /// Path to the second kubeconfig file
    #[arg(value_name = "KUBECONFIG2")]
    second_path: Option<PathBuf>,

    /// Path to the merged kubeconfig file
    #[arg(value_name = "OUTPUT")]
    output_path: Option<PathBuf>,

    /// Path to the first kubeconfig file
    #[arg(long = "kubeconfig1", value_name = "PATH", env = "KUBECONFIG_MERGE_FIRST")]
    kubeconfig1: Option<PathBuf>,

    /// Path to the second kubeconfig file
    #[arg(long = "kubeconfig2", value_name = "PATH", env = "KUBECONFIG_MERGE_SECOND")]
    kubeconfig2: Option<PathBuf>,

    /// Path to the merged kubeconfig file
    #[arg(short, long, value_name = "PATH", env = "KUBECONFIG_MERGE_OUTPUT")]
    output: Option<PathBuf>,

    /// How to set current-context in the merged file
    #[arg(
        long,
        value_enum,
        value_name = "POLICY",
        default_value_t = CurrentContextPolicy::Unset,
        env = "KUBECONFIG_MERGE_CURRENT_CONTEXT"
    )]
    current_context: CurrentContextPolicy,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn path_sources(&self) -> PathSources {
        PathSources {
            positional: [&self.first_path, &self.second_path, &self.output_path]
                .into_iter()
                .flatten()
                .cloned()
                .collect(),
            first: self.kubeconfig1.clone(),
            second: self.kubeconfig2.clone(),
            output: self.output.clone(),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let options = MergeOptions { current_context: cli.current_context };
    let config = match resolve(cli.path_sources(), options) {
        Ok(config) => config,
        // Prints usage and exits with clap's usage status.
        Err(err) => Cli::command().error(ErrorKind::MissingRequiredArgument, err).exit(),
    };

    let summary = pipeline::run(&config)?;

    println!("Kubeconfig files successfully merged!");
    println!(
        "  {} clusters, {} users, {} contexts -> {}",
        summary.clusters,
        summary.users,
        summary.contexts,
        summary.output.display()
    );
    if !summary.current_context.is_empty() {
        println!("  current-context: {}", summary.current_context);
    }
    Ok(())
}
