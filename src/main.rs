//! Synthetic order traffic generator.
//!
//! Publishes order payloads drawn from a fixed fixture set to an AMQP queue
//! on a fixed cadence. Fixtures named as well-formed orders get a fresh
//! `order_uid` on every publish; deliberately broken ones go out verbatim to
//! exercise downstream rejection paths. Runs until stopped by SIGINT or
//! SIGTERM.

mod config;
mod error;
mod fixture;
mod generator;
mod message;
mod publish;
mod startup;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, error::AppError, fixture::FixtureSet};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ordergen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    // Fixtures load before the broker connection so a broken deployment
    // fails without ever opening a session.
    let fixtures = if config.inject_uid {
        FixtureSet::load(&config.fixture_dir)?
    } else {
        FixtureSet::load_verbatim(&config.fixture_dir)?
    };
    tracing::info!(
        "Loaded {} fixtures from {}",
        fixtures.len(),
        config.fixture_dir.display()
    );

    let session = startup::connect_to_broker(&config).await?;
    tracing::info!("Connected to broker as {}", config.client_id);

    let shutdown = CancellationToken::new();
    let mut publish_loop = tokio::spawn(generator::run_publish_loop(
        fixtures,
        session.publisher(),
        config.publish_interval,
        shutdown.clone(),
    ));

    let result = tokio::select! {
        _ = shutdown_signal() => {
            shutdown.cancel();
            publish_loop.await
        }
        result = &mut publish_loop => result,
    };

    if let Err(e) = session.close().await {
        tracing::warn!("Error closing broker session: {}", e);
    }

    match result {
        Ok(loop_result) => loop_result,
        Err(e) => Err(AppError::InternalError(format!(
            "Publish loop task failed: {}",
            e
        ))),
    }
}

/// Completes when the process receives a termination request.
///
/// Unix: SIGINT (Ctrl+C) or SIGTERM. Elsewhere: Ctrl+C only.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::SignalKind;
        let mut sigterm = tokio::signal::unix::signal(SignalKind::terminate())
            .expect("Failed to register SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received SIGINT, shutting down");
            }
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM, shutting down");
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Received Ctrl+C, shutting down");
    }
}
