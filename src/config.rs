use std::net::SocketAddr;

use crate::models::enums::ReadingPolicy;

/// Application-level constants
pub const APP_NAME: &str = "Reliv";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address: the kiosk front end talks to localhost:5000.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Advertised name fragment of the supported BLE scale.
pub const DEFAULT_DEVICE_FILTER: &str = "Yoda1";

const ENV_BIND_ADDR: &str = "RELIV_BIND_ADDR";
const ENV_READING_POLICY: &str = "RELIV_READING_POLICY";
const ENV_DEVICE_FILTER: &str = "RELIV_DEVICE_FILTER";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "reliv=info,reliv_lib=info,tower_http=warn"
}

/// Runtime configuration for the kiosk service.
#[derive(Debug, Clone, PartialEq)]
pub struct KioskConfig {
    pub bind_addr: SocketAddr,
    /// How zero and blank vitals are interpreted.
    pub reading_policy: ReadingPolicy,
    /// Case-insensitive name fragment a scale must advertise.
    pub device_filter: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            reading_policy: ReadingPolicy::Legacy,
            device_filter: DEFAULT_DEVICE_FILTER.to_string(),
        }
    }
}

impl KioskConfig {
    /// Load from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep the
    /// default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BIND_ADDR) {
            match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Invalid {ENV_BIND_ADDR}, using {DEFAULT_BIND_ADDR}"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_READING_POLICY) {
            match raw.trim().parse::<ReadingPolicy>() {
                Ok(policy) => config.reading_policy = policy,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Invalid {ENV_READING_POLICY}, using legacy"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_DEVICE_FILTER) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.device_filter = trimmed.to_string();
            }
        }

        config
    }
}
