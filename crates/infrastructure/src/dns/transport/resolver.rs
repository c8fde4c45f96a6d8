use dnsbl_domain::{DomainError, ServerAddr};
use std::net::SocketAddr;
use std::time::Duration;

/// Resolves a hostname to all its IP addresses (IPv4 + IPv6).
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let target = format!("{}:{}", hostname, port);

    let addrs_iter = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| DomainError::TransportError {
            server: target.clone(),
            reason: format!("name resolution failed: {}", e),
        })?;

    let addrs: Vec<SocketAddr> = addrs_iter.collect();

    if addrs.is_empty() {
        return Err(DomainError::TransportError {
            server: target,
            reason: "no addresses found".to_string(),
        });
    }

    Ok(addrs)
}

/// First socket address of `server`, resolving its hostname if needed.
pub async fn resolve_server(
    server: &ServerAddr,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    if let Some(addr) = server.socket_addr() {
        return Ok(addr);
    }

    let (hostname, port) = server
        .unresolved_parts()
        .ok_or_else(|| DomainError::InvalidDomainName(server.to_string()))?;

    let addrs = resolve_all(hostname, port, timeout).await?;
    Ok(addrs[0])
}
