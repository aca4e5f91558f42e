use clap::{Parser, Subcommand};

use crate::commands;
use crate::utils::get_port;

#[derive(Parser)]
#[command(name = "harmoniq")]
#[command(about = "HarmoniQ market overview widgets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the widget server
    Serve {
        /// Port to listen on (default: HARMONIQ_PORT or 7779)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the metrics table of one asset class as JSON
    Table {
        /// equities, bonds, commodities, currencies, volatility, digital_assets
        class: String,
    },
    /// Print the normalized performance chart of one asset class as JSON
    Chart {
        /// equities, bonds, commodities, currencies, volatility, digital_assets
        class: String,
        /// Start of the chart window: 5d, mtd, ytd, 5y, 10y
        #[arg(long, default_value = "ytd")]
        period: String,
        /// dark or light
        #[arg(long, default_value = "dark")]
        theme: String,
    },
    /// Print the widget registry
    Widgets,
}

pub async fn run() {
    let cli = Cli::parse();
    crate::server::init_tracing();

    match cli.command {
        Commands::Serve { port } => {
            commands::serve::run(port.unwrap_or_else(get_port)).await;
        }
        Commands::Table { class } => {
            commands::table::run(&class).await;
        }
        Commands::Chart { class, period, theme } => {
            commands::chart::run(&class, &period, &theme).await;
        }
        Commands::Widgets => {
            commands::widgets::run();
        }
    }
}
