use access_gate::Institution;
use anyhow::Context;
use secrecy::Secret;
use serde::Deserialize;
use shared_kernel::configuration::config;
use travel_info::ArrivalWindow;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IdentitySettings {
    pub jwks_url: Url,
    pub issuer: String,
    /// Base URL of the provider's backend API; must end with `/`.
    pub api_url: Url,
    pub secret_key: Secret<String>,
    pub sign_in_url: Url,
    pub jwks_retry_seconds: u64,
    pub jwks_refresh_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitSettings {
    /// Sustained requests per second allowed to one client once the burst is spent.
    pub requests_per_second: u64,
    pub burst_size: u32,
}

impl RateLimitSettings {
    /// Milliseconds between replenished requests, as `per_millisecond` expects.
    pub fn replenish_interval_ms(&self) -> u64 {
        (1000 / self.requests_per_second.max(1)).max(1)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub identity: IdentitySettings,
    pub institution: Institution,
    pub arrival_window: ArrivalWindow,
    pub rate_limit: RateLimitSettings,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Settings> {
        config::<Settings>().context("Failed to deserialize settings to http_server settings")
    }

    pub fn address(&self) -> (String, u16) {
        (self.application.host.clone(), self.application.port)
    }
}
