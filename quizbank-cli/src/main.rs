//! quizbank CLI - question access service entry point
//!
//! Runs the HTTP server that exposes batch CRUD over the question
//! collection and the quiz-to-question traversal query.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quizbank_server::ServerConfig;

#[derive(Parser, Debug)]
#[command(
    name = "quizbank",
    author,
    version,
    about = "Batch CRUD service over a question collection backed by MongoDB"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// MongoDB connection string
        #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017")]
        mongodb_uri: String,

        /// Database name
        #[arg(long, env = "QUIZBANK_DB", default_value = "quizbank")]
        database: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            mongodb_uri,
            database,
        } => {
            let config = ServerConfig {
                host,
                port,
                mongodb_uri,
                database,
            };
            tracing::info!(host = %config.host, port = config.port, "quizbank serve");
            quizbank_server::serve(config).await?;
        }
    }

    Ok(())
}
