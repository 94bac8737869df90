//! Environment-driven configuration.
//!
//! Read once at startup after `.env` has been loaded.

use crate::types::GameConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

/// Parse an env var, falling back to `default` when missing or malformed
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid value {:?} for {}", raw, key);
                default
            }
        },
        Err(_) => default,
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let rng_seed = std::env::var("RNG_SEED").ok().and_then(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| tracing::warn!("Ignoring invalid value {:?} for RNG_SEED", raw))
                .ok()
        });

        Self {
            spin_delay_ms: env_or("SPIN_DELAY_MS", defaults.spin_delay_ms),
            double_score_limit: env_or("DOUBLE_SCORE_LIMIT", defaults.double_score_limit),
            double_fallback_points: env_or(
                "DOUBLE_FALLBACK_POINTS",
                defaults.double_fallback_points,
            ),
            must_guess_streak: env_or("MUST_GUESS_STREAK", defaults.must_guess_streak),
            rng_seed,
        }
    }

    pub fn spin_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.spin_delay_ms)
    }
}

/// Where the HTTP server listens and what it serves
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory with the presentation frontend
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            static_dir: "static".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: env_or("BIND_ADDR", defaults.bind_addr),
            port: env_or("PORT", defaults.port),
            static_dir: std::env::var("STATIC_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
