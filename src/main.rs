//! CLI entry point for scriptorium

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scriptorium::commands;
use scriptorium::commands::list::ListQuery;
use scriptorium::contact::ContactForm;
use scriptorium::Site;

#[derive(Parser)]
#[command(name = "scriptorium")]
#[command(author = "Yurii Cherkasov")]
#[command(version = "0.1.0")]
#[command(about = "Renders a markdown blog from a JSON manifest", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the blog list
    #[command(alias = "ls")]
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Only show posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Search titles, tags and already loaded posts
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Render an article
    Article {
        /// Slug of the post
        slug: String,
    },

    /// Preview a markdown file
    Preview {
        /// Markdown file
        file: PathBuf,
    },

    /// Check the manifest against the articles directory
    Check,

    /// Render a Latin quote for the homepage
    Quote {
        /// Pick deterministically instead of from the clock
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Render the social links section
    Social,

    /// Validate a contact message and print its payload
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Honeypot field
        #[arg(long, default_value = "")]
        website: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries the rendered HTML
    let filter = if cli.debug {
        "scriptorium=debug,info"
    } else {
        "scriptorium=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    match cli.command {
        Commands::List { page, tag, search } => {
            let site = Site::new(&base_dir)?;
            let query = ListQuery { page, tag, search };
            commands::list::run(&site, &query).await?;
        }

        Commands::Article { slug } => {
            let site = Site::new(&base_dir)?;
            commands::article::run(&site, &slug).await?;
        }

        Commands::Preview { file } => {
            let site = Site::new(&base_dir)?;
            commands::preview::run(&site, &file)?;
        }

        Commands::Check => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Checking {:?}", site.manifest_path());
            commands::check::run(&site)?;
        }

        Commands::Quote { seed } => commands::home::quote(seed),

        Commands::Social => commands::home::social(),

        Commands::Contact {
            name,
            email,
            subject,
            message,
            website,
        } => {
            let site = Site::new(&base_dir)?;
            let form = ContactForm {
                name,
                email,
                subject,
                message,
                website,
            };
            commands::contact::run(&site, form)?;
        }

        Commands::Version => {
            println!("scriptorium version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
