//! CLI entry point for mdsite

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version)]
#[command(about = "A minimal static site generator for Markdown content", long_about = None)]
struct Cli {
    /// Set the site root (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site (the default)
    #[command(alias = "b")]
    Build,

    /// Delete generated HTML and the index
    Clean,

    /// List articles and pages
    List,

    /// Create a new article
    New {
        /// Title of the new article
        title: String,

        /// Create a standalone page in the site root instead
        #[arg(short, long)]
        page: bool,
    },

    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to the site root)
        folder: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdsite=debug,info"
    } else {
        "mdsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            let site = mdsite::Site::new(&base_dir)?;
            tracing::info!("Building site in {:?}", base_dir);
            let summary = site.build()?;
            println!(
                "Built {} articles and {} pages",
                summary.posts, summary.pages
            );
        }

        Commands::Clean => {
            let site = mdsite::Site::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = mdsite::Site::new(&base_dir)?;
            mdsite::commands::list::run(&site)?;
        }

        Commands::New { title, page } => {
            let site = mdsite::Site::new(&base_dir)?;
            let path = mdsite::commands::new::create_post(&site, &title, page)?;
            println!("Created: {}", path.display());
        }

        Commands::Init { folder } => {
            let target_dir = match folder {
                Some(folder) if folder.is_absolute() => folder,
                Some(folder) => base_dir.join(folder),
                None => base_dir,
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            mdsite::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {}", target_dir.display());
        }
    }

    Ok(())
}
