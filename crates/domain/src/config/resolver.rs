use serde::{Deserialize, Serialize};

/// What a lookup that never got an answer means for the listing status.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransportErrorPolicy {
    /// Treat the failure like an absent record.
    #[default]
    NotListed,

    /// Report the failure instead of a status.
    Fail,
}

impl TransportErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotListed => "not-listed",
            Self::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Recursive resolvers; empty means the nameservers of `/etc/resolv.conf`.
    #[serde(default)]
    pub servers: Vec<String>,

    /// Per-attempt timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound for one lookup across all servers and attempts.
    #[serde(default = "default_lifetime_secs")]
    pub lifetime_secs: u64,

    #[serde(default)]
    pub on_transport_error: TransportErrorPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            timeout_secs: default_timeout_secs(),
            lifetime_secs: default_lifetime_secs(),
            on_transport_error: TransportErrorPolicy::default(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    8
}

fn default_lifetime_secs() -> u64 {
    8
}
