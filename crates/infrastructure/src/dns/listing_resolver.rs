//! Stub resolver used to look up listings.
//!
//! Each lookup walks the configured recursive servers in order. Every attempt
//! is bounded by the per-attempt timeout and the whole lookup by the
//! lifetime. Truncated UDP answers are retried over TCP on the same server.

use async_trait::async_trait;
use dnsbl_application::ports::ListingResolver;
use dnsbl_domain::{DomainError, LookupResult, RecordType, ResolverConfig, ServerAddr};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use super::message::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::resolver::resolve_server;
use super::transport::tcp::TcpTransport;
use super::transport::udp::UdpTransport;
use super::transport::DnsTransport;

pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

pub struct StubListingResolver {
    servers: Vec<ServerAddr>,
    timeout: Duration,
    lifetime: Duration,
}

impl StubListingResolver {
    pub fn new(servers: Vec<ServerAddr>, timeout: Duration, lifetime: Duration) -> Self {
        Self {
            servers,
            timeout,
            lifetime,
        }
    }

    /// Uses `[resolver] servers`, or the nameservers of `/etc/resolv.conf`
    /// when that list is empty.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let servers = if config.servers.is_empty() {
            system_nameservers(Path::new(RESOLV_CONF_PATH))?
        } else {
            config
                .servers
                .iter()
                .map(|s| s.parse::<ServerAddr>().map_err(DomainError::ConfigError))
                .collect::<Result<Vec<_>, _>>()?
        };

        if servers.is_empty() {
            return Err(DomainError::NoResolverServers);
        }

        Ok(Self::new(
            servers,
            Duration::from_secs(config.timeout_secs),
            Duration::from_secs(config.lifetime_secs),
        ))
    }

    async fn query_server(
        &self,
        server: &ServerAddr,
        name: &str,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let server_addr = resolve_server(server, self.timeout).await?;
        let (id, bytes) = MessageBuilder::build_query(name, &record_type)?;

        let udp = UdpTransport::new(server_addr)
            .send(&bytes, self.timeout)
            .await?;
        let response = ResponseParser::parse(&udp.bytes)?;
        response.ensure_id(id)?;

        if !response.truncated {
            return Ok(response);
        }

        debug!(server = %server_addr, name = %name, "Truncated UDP response, retrying over TCP");

        let tcp = TcpTransport::new(server_addr)
            .send(&bytes, self.timeout)
            .await?;
        let response = ResponseParser::parse(&tcp.bytes)?;
        response.ensure_id(id)?;

        Ok(response)
    }

    async fn lookup_all_servers(&self, name: &str, record_type: RecordType) -> LookupResult {
        let mut last_error = DomainError::NoResolverServers.to_string();

        for server in &self.servers {
            match self.query_server(server, name, record_type).await {
                Ok(response) if response.is_success() => {
                    let values = response.values_of(record_type);
                    if values.is_empty() {
                        return LookupResult::NotFound;
                    }
                    return LookupResult::Found(values);
                }
                Ok(response) if response.is_nxdomain() => return LookupResult::NotFound,
                Ok(response) => {
                    debug!(
                        server = %server,
                        name = %name,
                        rcode = response.rcode_name(),
                        "Server failed lookup, trying next"
                    );
                    last_error = format!("{} answered {}", server, response.rcode_name());
                }
                Err(e) => {
                    debug!(server = %server, name = %name, error = %e, "Lookup attempt failed");
                    last_error = e.to_string();
                }
            }
        }

        LookupResult::TransportError(last_error)
    }
}

#[async_trait]
impl ListingResolver for StubListingResolver {
    async fn lookup(&self, name: &str, record_type: RecordType) -> LookupResult {
        match tokio::time::timeout(self.lifetime, self.lookup_all_servers(name, record_type)).await
        {
            Ok(result) => {
                debug!(name = %name, record_type = %record_type, result = ?result, "Lookup finished");
                result
            }
            Err(_) => {
                warn!(
                    name = %name,
                    record_type = %record_type,
                    lifetime_secs = self.lifetime.as_secs(),
                    "Lookup lifetime exceeded"
                );
                LookupResult::TransportError(format!(
                    "lookup of {} {} exceeded {}s",
                    name,
                    record_type,
                    self.lifetime.as_secs()
                ))
            }
        }
    }
}

fn system_nameservers(path: &Path) -> Result<Vec<ServerAddr>, DomainError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;
    Ok(parse_resolv_conf(&contents))
}

/// `nameserver` entries of a resolv.conf file. Entries that do not parse
/// (scoped IPv6 addresses, typos) are skipped.
pub fn parse_resolv_conf(contents: &str) -> Vec<ServerAddr> {
    contents
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("nameserver"), Some(addr)) => match addr.parse::<ServerAddr>() {
                    Ok(server) => Some(server),
                    Err(e) => {
                        warn!(entry = %addr, error = %e, "Skipping resolv.conf nameserver");
                        None
                    }
                },
                _ => None,
            }
        })
        .collect()
}
