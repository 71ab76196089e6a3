//! Combined binary - runs both transports in one process.
//!
//! A single application core is shared by the HTTP and RPC servers; a
//! SIGINT/SIGTERM watcher fans the shutdown signal out to both.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adcore::{
    AdManager, CredentialManager, InMemoryAdRepository, InMemoryUserRepository, UserManager,
};
use credstore::{Database, PgCredentialStore};
use httpapi::state::AppState;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "adboard")]
#[command(about = "Classified-ad listing service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP and RPC servers in a single process
    Serve {
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "HTTP_PORT", default_value = "18080")]
        http_port: u16,
        #[arg(long, env = "RPC_PORT", default_value = "50054")]
        rpc_port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Commands::Serve {
            host,
            http_port,
            rpc_port,
        } => {
            info!("starting listing service");
            info!("  http: http://{}:{}", host, http_port);
            info!("  rpc:  {}:{}", host, rpc_port);

            // One core instance shared by both transports
            let ads = Arc::new(AdManager::new(Arc::new(InMemoryAdRepository::new())));
            let users = Arc::new(UserManager::new(Arc::new(InMemoryUserRepository::new())));

            let db = Database::connect(&config.database_url).await?;
            let credentials = Arc::new(CredentialManager::new(Arc::new(PgCredentialStore::new(
                db.get_connection(),
            ))));

            let state = AppState::new(ads.clone(), users.clone(), credentials);

            let http_addr: SocketAddr = format!("{}:{}", host, http_port).parse()?;
            let rpc_addr: SocketAddr = format!("{}:{}", host, rpc_port).parse()?;

            let (shutdown_tx, shutdown_rx) = watch::channel(());
            tokio::spawn(async move {
                wait_for_signal().await;
                info!("captured shutdown signal");
                let _ = shutdown_tx.send(());
            });

            let mut http_shutdown = shutdown_rx.clone();
            let http = tokio::spawn(async move {
                httpapi::serve(http_addr, state, async move {
                    let _ = http_shutdown.changed().await;
                })
                .await
            });

            let mut rpc_shutdown = shutdown_rx;
            let rpc = tokio::spawn(async move {
                rpcapi::serve(rpc_addr, ads, users, async move {
                    let _ = rpc_shutdown.changed().await;
                })
                .await
            });

            let (http_result, rpc_result) = tokio::try_join!(http, rpc)?;
            if let Err(e) = http_result {
                error!("http server failed: {}", e);
            }
            if let Err(e) = rpc_result {
                error!("rpc server failed: {}", e);
            }

            info!("servers were successfully shut down");
        }
    }

    Ok(())
}

/// Resolve on SIGINT or SIGTERM.
async fn wait_for_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
