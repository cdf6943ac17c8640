use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod csp;
mod server;

#[derive(Debug, Parser)]
#[command(name = "csp-handler")]
#[command(about = "Receive and log Content-Security-Policy violation reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server to handle CSP violation events.
    Serve {
        /// Binds csp-handler to the specified IP.
        #[arg(short, long)]
        bind: Option<String>,

        /// Runs csp-handler on the specified port.
        #[arg(short, long)]
        port: Option<u16>,

        /// Reads bind settings from a TOML file; flags take precedence.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter("info")
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { bind, port, config } => serve(bind, port, config).await,
    }
}

async fn serve(
    bind: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let defaults = match config {
        Some(path) => config::load(path)?,
        None => config::Config::default(),
    };

    let addr = format!(
        "{}:{}",
        bind.unwrap_or(defaults.bind),
        port.unwrap_or(defaults.port)
    );

    tracing::info!(addr = %addr, "starting http server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, server::app()).await?;

    Ok(())
}
