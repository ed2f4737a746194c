use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tunechart::{Category, ChartConfig, ChartSession, Country, FeedApi, CATEGORIES, COUNTRIES};

#[derive(Parser)]
#[command(name = "tunechart-cli")]
#[command(about = "Browse the iTunes top charts", long_about = None)]
struct Cli {
    /// TOML config file (can also be set via TUNECHART_CONFIG env var)
    #[arg(long, env = "TUNECHART_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a top chart
    Top {
        /// Country slug (us, de, fr, in)
        #[arg(long)]
        country: Option<Country>,

        /// Category slug (topalbums, topsongs)
        #[arg(long)]
        category: Option<Category>,

        /// Only show entries whose title or artist contains this
        #[arg(short, long, default_value = "")]
        search: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known countries
    Countries,
    /// List known categories
    Categories,
}

/// Line printed to stderr when the chart could not be fetched.
fn error_line(message: &str) -> String {
    format!("❌ Error: {}", message)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };

    match cli.command {
        Commands::Top {
            country,
            category,
            search,
            json,
        } => {
            let mut query = config.initial_query()?;
            if let Some(country) = country {
                query = query.with_country(country);
            }
            if let Some(category) = category {
                query = query.with_category(category);
            }

            let session = ChartSession::new(FeedApi::with_config(&config)?, query);
            session.load().await;
            session.set_search(search).await;
            let snapshot = session.snapshot().await;

            if let Some(message) = &snapshot.error {
                eprintln!("{}", error_line(message));
                std::process::exit(1);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                return Ok(());
            }

            println!("{} ({})", snapshot.heading, snapshot.query.country);
            if snapshot.albums.is_empty() {
                println!("No albums found matching \"{}\"", snapshot.search);
            }
            for (i, album) in snapshot.albums.iter().enumerate() {
                println!(
                    "{}. {} - {} [{}] (ID: {})",
                    i + 1,
                    album.artist,
                    album.name,
                    album.price,
                    album.id
                );
            }
        }
        Commands::Countries => {
            for country in COUNTRIES {
                println!("{}\t{}", country.slug, country.name);
            }
        }
        Commands::Categories => {
            for category in CATEGORIES {
                println!("{}\t{}", category.slug, category.name);
            }
        }
    }

    Ok(())
}
