use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Wildcard value for `cors_allowed_origins`
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind; unparseable values fall back to all interfaces
    pub host: String,
    pub port: u16,
    /// `*` or a comma-separated list of origins
    pub cors_allowed_origins: String,
    /// JSON file replacing the built-in dealer listings
    pub dealer_inventory_path: Option<PathBuf>,
    /// JSON file replacing the built-in warehouse listings
    pub warehouse_inventory_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_allowed_origins: ANY_ORIGIN.to_string(),
            dealer_inventory_path: None,
            warehouse_inventory_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: non_empty("BIND_HOST").unwrap_or(defaults.host),
            port: non_empty("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .unwrap_or(defaults.cors_allowed_origins),
            dealer_inventory_path: non_empty("DEALER_INVENTORY_PATH").map(PathBuf::from),
            warehouse_inventory_path: non_empty("WAREHOUSE_INVENTORY_PATH").map(PathBuf::from),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(ip, self.port)
    }

    /// Check if every origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins().iter().any(|o| o == ANY_ORIGIN)
    }

    /// Configured origins, trimmed, empty entries dropped
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_open() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.port, 8000);
        assert_eq!(config.socket_addr(), "0.0.0.0:8000".parse().unwrap());
        assert!(config.allows_any_origin());
        assert!(config.dealer_inventory_path.is_none());
        assert!(config.warehouse_inventory_path.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("BIND_HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("DEALER_INVENTORY_PATH", "/srv/dealer.json"),
        ]));
        assert_eq!(config.socket_addr(), "127.0.0.1:9090".parse().unwrap());
        assert_eq!(
            config.dealer_inventory_path,
            Some(PathBuf::from("/srv/dealer.json"))
        );
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[("PORT", "eighty")]));
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[
            ("CORS_ALLOWED_ORIGINS", "  "),
            ("WAREHOUSE_INVENTORY_PATH", ""),
        ]));
        assert!(config.allows_any_origin());
        assert!(config.warehouse_inventory_path.is_none());
    }

    #[test]
    fn origin_list_is_split_and_trimmed() {
        let config = Config::from_lookup(lookup(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://bazaar.example, http://localhost:5173,,",
        )]));
        assert!(!config.allows_any_origin());
        assert_eq!(
            config.allowed_origins(),
            vec!["https://bazaar.example", "http://localhost:5173"]
        );
    }
}
