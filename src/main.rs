use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{ConfigCommand, ProductCommand};
use prodcat::api::CatalogClient;
use prodcat::config::Config;
use prodcat::ui;

#[derive(Parser)]
#[command(name = "prodcat")]
#[command(version)]
#[command(about = "A product catalog client", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage products (list, show, add, edit, delete)
    Product(ProductCommand),

    /// Browse the catalog interactively
    Browse,

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prodcat=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    let client = CatalogClient::new(&config.server_url.value);

    match cli.command {
        Some(Commands::Product(cmd)) => {
            cmd.run(&client).await?;
        }
        Some(Commands::Browse) => {
            ui::run_session(client).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
