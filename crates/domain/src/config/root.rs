use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::listing_log::ListingLogConfig;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::transfer::TransferConfig;
use super::tsig::TsigConfig;
use super::zone::ZoneConfig;

/// Environment variable overriding `[tsig] secret`.
pub const TSIG_SECRET_ENV: &str = "DNSBL_TSIG_SECRET";

const LOCAL_CONFIG_PATH: &str = "dnsbl.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsbl/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Blocklist zone and its authoritative server
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Key used to sign dynamic updates
    #[serde(default)]
    pub tsig: TsigConfig,

    /// Resolver used for listing queries
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub transfer: TransferConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub listing_log: ListingLogConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsbl.toml in current directory
    /// 3. /etc/dnsbl/config.toml
    /// 4. Default configuration
    ///
    /// The environment and the command line are applied on top, in that order.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup(TSIG_SECRET_ENV).filter(|s| !s.trim().is_empty()) {
            self.tsig.secret = Some(secret.trim().to_string());
        }
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(zone) = overrides.zone {
            self.zone.name = zone;
        }
        if let Some(server) = overrides.server {
            self.zone.server = server;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(path) = overrides.listing_log {
            self.listing_log.path = path;
        }
    }

    /// Validate configuration
    ///
    /// TSIG material is only checked for consistency here: reads and scans
    /// work without a key, updates refuse to start without one. An algorithm
    /// that cannot sign is rejected even without a key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zone = self.zone.origin();
        if zone.is_empty() {
            return Err(ConfigError::Validation(
                "zone.name is not set".to_string(),
            ));
        }
        if zone.split('.').any(|label| label.is_empty() || label.len() > 63) {
            return Err(ConfigError::Validation(format!(
                "zone.name '{}' is not a valid domain name",
                self.zone.name
            )));
        }

        self.zone
            .server_addr()
            .map_err(|e| ConfigError::Validation(format!("zone.server: {}", e)))?;

        if self.zone.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "zone.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.zone.listed_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "zone.listed_prefix cannot be empty".to_string(),
            ));
        }

        if !self
            .zone
            .sentinel
            .to_string()
            .starts_with(&self.zone.listed_prefix)
        {
            return Err(ConfigError::Validation(format!(
                "zone.sentinel {} does not match zone.listed_prefix '{}'",
                self.zone.sentinel, self.zone.listed_prefix
            )));
        }

        if self.tsig.secret.is_some() && self.tsig.key_name.is_empty() {
            return Err(ConfigError::Validation(
                "tsig.secret is set but tsig.key_name is empty".to_string(),
            ));
        }

        if !self.tsig.algorithm.can_sign() {
            return Err(ConfigError::Validation(format!(
                "tsig.algorithm '{}' cannot be used for signing; regenerate the key \
                 with hmac-sha256, hmac-sha384 or hmac-sha512",
                self.tsig.algorithm
            )));
        }

        if self.resolver.timeout_secs == 0 || self.resolver.lifetime_secs == 0 {
            return Err(ConfigError::Validation(
                "resolver timeouts must be greater than 0".to_string(),
            ));
        }

        for server in &self.resolver.servers {
            server.parse::<crate::ServerAddr>().map_err(|e| {
                ConfigError::Validation(format!("resolver.servers: {}", e))
            })?;
        }

        if self.listing_log.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "listing_log.path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub zone: Option<String>,
    pub server: Option<String>,
    pub log_level: Option<String>,
    pub listing_log: Option<String>,
}
