use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "revenue-pulse")]
#[command(about = "Revenue stats, daily trends and sales forecast API", long_about = None)]
pub struct Cli {
    /// Read sales from a CSV export instead of Supabase (overrides SALES_CSV_PATH)
    #[arg(long, global = true)]
    pub csv: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Listen port (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print revenue stats as JSON
    Stats,
    /// Print the daily revenue trend as JSON
    Trends,
    /// Print a 7-day forecast as JSON
    Forecast {
        /// Fixed RNG seed (overrides FORECAST_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            commands::serve::run(port, cli.csv).await;
        }
        Commands::Stats => {
            commands::stats::run(cli.csv).await;
        }
        Commands::Trends => {
            commands::trends::run(cli.csv).await;
        }
        Commands::Forecast { seed } => {
            commands::forecast::run(cli.csv, seed).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port_and_csv() {
        let cli = Cli::try_parse_from(["revenue-pulse", "serve", "--port", "9000", "--csv", "sales.csv"])
            .unwrap();

        assert_eq!(cli.csv, Some(PathBuf::from("sales.csv")));
        assert!(matches!(cli.command, Commands::Serve { port: Some(9000) }));
    }

    #[test]
    fn test_parse_forecast_seed() {
        let cli = Cli::try_parse_from(["revenue-pulse", "forecast", "--seed", "42"]).unwrap();
        assert!(matches!(cli.command, Commands::Forecast { seed: Some(42) }));
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["revenue-pulse", "seed"]).is_err());
    }
}
