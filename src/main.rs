//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version = "0.1.0")]
#[command(about = "An in-memory content engine for a personal portfolio and blog", long_about = None)]
struct Cli {
    /// Post dataset to load instead of the bundled one (JSON array)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Site configuration file (folio.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (post, category, tag, project, experience)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post by slug
    Show {
        /// Slug of the post to show
        slug: String,
    },

    /// Filter the post listing by category
    Filter {
        /// Categories to toggle into the selection ("all" clears it)
        #[arg(short, long = "category")]
        categories: Vec<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::List { r#type } => {
            let folio = folio_rs::Folio::new(cli.data.as_deref(), cli.config.as_deref())?;
            folio_rs::commands::list::run(&folio, &r#type)?;
        }

        Commands::Show { slug } => {
            let folio = folio_rs::Folio::new(cli.data.as_deref(), cli.config.as_deref())?;
            if !folio_rs::commands::show::run(&folio, &slug)? {
                std::process::exit(1);
            }
        }

        Commands::Filter { categories } => {
            let folio = folio_rs::Folio::new(cli.data.as_deref(), cli.config.as_deref())?;
            folio_rs::commands::filter::run(&folio, &categories)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
