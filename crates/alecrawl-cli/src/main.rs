mod plan;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "alecrawl-cli")]
#[command(about = "Plan walking brewery crawls from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Plan a crawl through a city's breweries
    Plan {
        /// City to search for breweries
        #[arg(long)]
        city: String,

        /// Optional US state to narrow the search
        #[arg(long)]
        state: Option<String>,

        /// Longest walk allowed between consecutive stops, in miles
        #[arg(long, default_value_t = 1.0)]
        distance: f64,

        /// Desired number of stops
        #[arg(long, default_value_t = 5)]
        stops: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Plan {
            city,
            state,
            distance,
            stops,
        }) => plan::run(&city, state.as_deref(), distance, stops).await,
        None => {
            println!("alecrawl-cli: try `plan --city <CITY>`");
            Ok(())
        }
    }
}
