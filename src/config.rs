use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_MAX_AGE_SECONDS: u64 = 3_600;

const STATIC_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);

/// Settings for the static host, read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub dist_dir: PathBuf,
    pub static_max_age_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::new(DEFAULT_BIND_HOST, DEFAULT_PORT),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            static_max_age_seconds: DEFAULT_STATIC_MAX_AGE_SECONDS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Invalid or
    /// out-of-range values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let host = non_empty(lookup("SITE_BIND_HOST"))
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(DEFAULT_BIND_HOST);
        let dist_dir = non_empty(lookup("SITE_DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_max_age_seconds = parse_u64_with_bounds(
            lookup("SITE_STATIC_MAX_AGE_SECONDS"),
            DEFAULT_STATIC_MAX_AGE_SECONDS,
            STATIC_MAX_AGE_SECONDS_BOUNDS,
        );

        Self {
            bind_address: SocketAddr::new(host, port),
            dist_dir,
            static_max_age_seconds,
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn cache_control(&self) -> String {
        if self.static_max_age_seconds == 0 {
            "no-cache".to_string()
        } else {
            format!("public, max-age={}", self.static_max_age_seconds)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
