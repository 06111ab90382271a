use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ticker_rs::relay::{
    CONTACT_PATH, Mailer, RelayArgs, RelayConfig, RelayState, ResendMailer, contact_router,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = RelayArgs::parse();
    let _ = ticker_rs::telemetry::init_default_tracing();

    let config = RelayConfig::from_args(&args);
    let mailer: Option<Arc<dyn Mailer>> = match config.resend_api_key.as_deref() {
        Some(api_key) => Some(Arc::new(
            ResendMailer::new(api_key, &args.resend_api_base)
                .context("failed to build Resend client")?,
        )),
        None => None,
    };

    if config.should_mock() {
        warn!("contact relay running in mock mode; submissions are not emailed");
    } else if config.provider_settings().is_none() {
        warn!("contact relay provider settings incomplete; submissions will fail with 500");
    }

    let app = contact_router(RelayState::new(config, mailer));
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!(addr = %args.bind, path = CONTACT_PATH, "contact relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("contact relay server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
    info!("contact relay shutting down");
}
