//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod clean;
pub mod doctor;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build all stale bundle targets
    Build {
        /// Also build debug-only targets
        #[arg(long)]
        debug: bool,

        /// Disable build caching; rebuild every target
        #[arg(long)]
        no_cache: bool,

        /// Number of parallel jobs (defaults to the CPU count)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Path to the manifest file
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },

    /// Remove generated artifacts and the build cache
    Clean {
        /// Path to the manifest file
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },

    /// Check external tooling and manifest health
    Doctor {
        /// Path to the manifest file
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}

impl Commands {
    /// Dispatch to the command implementation
    pub async fn run(self, quiet: bool) -> Result<()> {
        let project_dir = std::env::current_dir()?;
        match self {
            Commands::Build {
                debug,
                no_cache,
                jobs,
                manifest,
            } => {
                let options = build::BuildOptions {
                    debug,
                    no_cache,
                    jobs,
                    manifest,
                    quiet,
                };
                build::execute(&project_dir, options).await
            }
            Commands::Clean { manifest } => clean::execute(&project_dir, manifest.as_deref()),
            Commands::Doctor { manifest } => doctor::execute(&project_dir, manifest.as_deref()),
        }
    }
}
