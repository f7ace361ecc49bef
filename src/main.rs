use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// pantry - shopping lists from weekly meal plans
#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Aggregate a week of recipes into one shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Compute and store the shopping list of a meal plan, then print it
    ShoppingList {
        plan_id: String,
    },
    /// Mark ingredients of a meal plan as already owned
    Exclude {
        plan_id: String,

        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantry::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantry::observability::init_observability(
        "pantry",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => pantry::migrate::migrate(&config).await,
        Commands::Reset => pantry::migrate::reset(&config).await,
        Commands::ShoppingList { plan_id } => cli::shopping::shopping_list(config, plan_id).await,
        Commands::Exclude { plan_id, names } => cli::shopping::exclude(config, plan_id, names).await,
    }
}
