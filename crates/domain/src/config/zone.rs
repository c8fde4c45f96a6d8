use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use crate::listing::{LISTED_SENTINEL, LISTING_TTL};
use crate::server_addr::ServerAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Blocklist zone, e.g. `bl.example.org`.
    #[serde(default)]
    pub name: String,

    /// Authoritative server receiving updates and serving transfers.
    #[serde(default = "default_server")]
    pub server: String,

    /// Deadline for a whole update or transfer exchange.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_sentinel")]
    pub sentinel: Ipv4Addr,

    /// Prefix of A record values that mark a listing in a zone scan.
    #[serde(default = "default_listed_prefix")]
    pub listed_prefix: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl ZoneConfig {
    /// Zone name without the trailing dot.
    pub fn origin(&self) -> &str {
        self.name.trim_end_matches('.')
    }

    pub fn server_addr(&self) -> Result<ServerAddr, String> {
        self.server.parse()
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            server: default_server(),
            timeout_secs: default_timeout_secs(),
            sentinel: default_sentinel(),
            listed_prefix: default_listed_prefix(),
            ttl: default_ttl(),
        }
    }
}

fn default_server() -> String {
    "127.0.0.1:53".to_string()
}

fn default_timeout_secs() -> u64 {
    8
}

fn default_sentinel() -> Ipv4Addr {
    LISTED_SENTINEL
}

fn default_listed_prefix() -> String {
    "127.".to_string()
}

fn default_ttl() -> u32 {
    LISTING_TTL
}
