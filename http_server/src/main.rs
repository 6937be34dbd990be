use std::sync::Arc;
use std::time::Duration;

use crate::app_container::Application;
use crate::authentication::JwtSessionVerifier;
use crate::configuration::Settings;
use crate::identity_provider::ProviderSessions;
use access_gate::{AccessGate, SignOutInteractor};
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod app_container;
mod authentication;
mod configuration;
mod errors;
mod identity_provider;
mod routes;
mod views;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("bear_force_one")?;
    start().await?;
    shared_kernel::tracing::shutdown_global_tracer_provider();
    Ok(())
}

async fn start() -> anyhow::Result<()> {
    let settings = Settings::parse()?;

    let verifier = JwtSessionVerifier::new(settings.identity.issuer.clone());
    verifier.spawn_key_fetch(
        settings.identity.jwks_url.clone(),
        Duration::from_secs(settings.identity.jwks_retry_seconds),
        Duration::from_secs(settings.identity.jwks_refresh_seconds),
    );
    let provider = ProviderSessions::new(
        settings.identity.api_url.clone(),
        settings.identity.secret_key.clone(),
    );

    let application = web::Data::new(Application {
        sessions: Arc::new(verifier),
        gate: AccessGate::new(settings.institution.clone()),
        sign_out: SignOutInteractor::new(Arc::new(provider)),
        arrival_window: settings.arrival_window.clone(),
        sign_in_url: settings.identity.sign_in_url.clone(),
    });

    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(settings.rate_limit.replenish_interval_ms())
        .burst_size(settings.rate_limit.burst_size)
        .finish()
        .context("Invalid rate limit settings")?;

    let address = settings.address();
    tracing::info!(host = %address.0, port = address.1, "Starting http server");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Governor::new(&governor_config))
            .configure(routes::config)
            .app_data(application.clone())
    })
    .bind(address)?
    .run()
    .await
    .context("Server failed to run")
}
