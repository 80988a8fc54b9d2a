//! Command-line interface

use crate::config::ReadsmithConfig;
use crate::server::{create_router, AppState};
use crate::service::ReadmeService;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "readsmith", version, about = "AI-assisted README generation service")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug) output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Check configuration and backend credentials
    Health,
}

#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Bind address, overriding READSMITH_BIND_ADDR
    #[arg(long)]
    pub bind: Option<String>,
}

/// Runs the HTTP server. Returns a process exit code.
pub async fn handle_serve(args: &ServeArgs) -> i32 {
    match run_server(args).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    }
}

async fn run_server(args: &ServeArgs) -> anyhow::Result<()> {
    let mut config = ReadsmithConfig::default();
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.clone();
    }
    config.validate().context("invalid configuration")?;

    let credentials_ok = config.credentials_present();
    if !credentials_ok {
        warn!(
            "No credentials found for provider {:?}; requests will be rejected",
            config.provider
        );
    }

    let service = ReadmeService::new(&config)
        .await
        .context("failed to initialize generation backend")?;

    let state = AppState {
        service: Arc::new(service),
        credentials_ok,
        max_upload_size: config.max_upload_size,
    };

    let router = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("readsmith listening on {}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}

/// Prints configuration and credential status. Returns a process exit code.
pub async fn handle_health() -> i32 {
    let config = ReadsmithConfig::default();

    if let Err(e) = config.validate() {
        eprintln!("Configuration invalid: {e}");
        return 1;
    }

    println!("{config}");

    if config.credentials_present() {
        println!("Credentials: present");
        0
    } else {
        println!("Credentials: MISSING for provider {:?}", config.provider);
        1
    }
}
