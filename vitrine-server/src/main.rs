use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_config::{ConfigLoad, ConfigLoader};
use vitrine_server::{
    infra::app_state::AppState, mailer::SmtpMailer, routes,
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "vitrine-server")]
#[command(about = "Contact relay for the Vitrine portfolio site")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Quiet defaults. Override via RUST_LOG.
                    "info,tower_http=warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    let mailer = SmtpMailer::from_config(&config.mail)
        .context("failed to construct SMTP transport")?;
    info!(
        smtp = %config.mail.smtp_host,
        account = %config.mail.username,
        "mail transport configured"
    );

    let bind = (config.server.host.clone(), config.server.port);
    let state = AppState::new(Arc::new(config), Arc::new(mailer));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(bind.clone())
        .await
        .with_context(|| format!("failed to bind {}:{}", bind.0, bind.1))?;
    let addr = listener.local_addr().context("listener has no address")?;
    info!(%addr, "contact relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        return;
    }
    info!("ctrl-c received; shutting down");
}
