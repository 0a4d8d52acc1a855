// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use sourcedata::Registry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "sourcedata")]
#[command(author, version, about = "Version-source registry tool for build recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a registry document, reporting every violation
    Validate {
        /// Path to the registry document
        file: PathBuf,
        /// Recipe directory to check patch files against
        #[arg(long)]
        patch_root: Option<PathBuf>,
    },
    /// Show the source archive for a version
    Source {
        /// Path to the registry document
        file: PathBuf,
        /// Upstream version
        version: String,
    },
    /// Show the ordered patch list for a version
    Patches {
        /// Path to the registry document
        file: PathBuf,
        /// Upstream version
        version: String,
    },
    /// List the versions known to a registry document
    Versions {
        /// Path to the registry document
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate { file, patch_root }) => {
            info!("Validating registry: {}", file.display());
            let registry = Registry::load(&file)?;

            let violations = match patch_root {
                Some(root) => registry.validate_against(&root),
                None => registry.validate(),
            };

            if violations.is_empty() {
                println!(
                    "{}: ok ({} versions)",
                    file.display(),
                    registry.versions().count()
                );
                Ok(())
            } else {
                for violation in &violations {
                    println!("{}", violation);
                }
                Err(anyhow::anyhow!(
                    "{} violation(s) in {}",
                    violations.len(),
                    file.display()
                ))
            }
        }
        Some(Commands::Source { file, version }) => {
            let registry = Registry::load(&file)?;
            let entry = registry.resolve_source(&version)?;

            println!("url:    {}", entry.url);
            println!("sha256: {}", entry.sha256);
            Ok(())
        }
        Some(Commands::Patches { file, version }) => {
            let registry = Registry::load(&file)?;
            let patches = registry.resolve_patches(&version)?;

            if patches.is_empty() {
                println!("No patches for version {}", version);
                return Ok(());
            }
            for (i, patch) in patches.iter().enumerate() {
                println!(
                    "{}. {} [{}] {}",
                    i + 1,
                    patch.patch_file,
                    patch.patch_type,
                    patch.patch_description
                );
                if let Some(source) = &patch.patch_source {
                    println!("   source: {}", source);
                }
            }
            Ok(())
        }
        Some(Commands::Versions { file }) => {
            let registry = Registry::load(&file)?;
            for version in registry.versions() {
                println!("{}", version);
            }
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("sourcedata v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'sourcedata --help' for usage information");
            Ok(())
        }
    }
}
