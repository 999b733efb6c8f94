use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use extrakt::config::Config;
use extrakt::provider::{self, TopicProvider};
use extrakt::web;

/// Extrakt: topic extraction for counseling-session transcripts.
///
/// Sends a transcript to an LLM backend and returns the 5-7 main topics
/// as "Titel: Beschreibung" strings, either over HTTP or on the CLI.
#[derive(Parser)]
#[command(name = "extrakt", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP extraction service
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8787")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Extract topics from a transcript file (or stdin) once and print them
    Extract {
        /// Transcript file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("extrakt=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            // Fail at startup, not on the first request
            config.require_provider()?;
            let provider = provider::build_provider(&config);
            info!(backend = provider.name(), "Starting extraction service");
            web::run_server(provider, port, &bind).await?;
        }

        Commands::Extract { file } => {
            let config = Config::load()?;
            config.require_provider()?;
            let provider = provider::build_provider(&config);

            let transcript = read_transcript(file.as_deref())?;
            if transcript.trim().is_empty() {
                anyhow::bail!("Transcript is empty — nothing to analyze.");
            }

            let topics = provider.extract_topics(&transcript).await?;

            println!(
                "{} ({} topics via {})\n",
                "Hauptthemen".bold(),
                topics.len(),
                provider.name()
            );
            for (i, topic) in topics.iter().enumerate() {
                match topic.split_once(':') {
                    Some((title, description)) => {
                        println!("{}. {}:{}", i + 1, title.cyan(), description);
                    }
                    None => println!("{}. {topic}", i + 1),
                }
            }
        }
    }

    Ok(())
}

/// Read a transcript from a file, or from stdin when no file is given.
fn read_transcript(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript from {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read transcript from stdin")?;
            Ok(buf)
        }
    }
}
