//! Portal CLI
//!
//! Command-line interface for the team portal: serve the API, import seed
//! data and inspect the database.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "portal")]
#[command(about = "Team portal - serve, seed and inspect", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Print collection counts and dashboard figures
    Stats(commands::stats::StatsArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args),
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Stats(args) => commands::stats::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
