use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod server;

#[derive(Parser)]
#[command(name = "geoquiz-cli", version, about = "GeoQuiz CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Parse generated quiz text into JSON questions
    Parse(commands::parse::ParseArgs),
    /// Replay timestamped location reports through the tracker
    Replay(commands::replay::ReplayArgs),
    /// Generate a quiz about a place
    Generate(commands::generate::GenerateArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr, filtered by GEOQUIZ_LOG (default "info").
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GEOQUIZ_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run(args),
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
