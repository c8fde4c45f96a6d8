use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("No resolver servers available")]
    NoResolverServers,

    #[error("TSIG error: {0}")]
    TsigError(String),

    #[error("Zone transfer of {zone} failed: {reason}")]
    ZoneTransferFailed { zone: String, reason: String },

    #[error("Listing applied but log write to {path} failed: {reason}")]
    ListingLogFailed { path: String, reason: String },

    #[error("Lookup of {name} failed: {reason}")]
    LookupFailed { name: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True for failures of the network path itself, as opposed to a server
    /// answer that we could parse.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::TransportError { .. }
                | DomainError::NoResolverServers
        )
    }
}
