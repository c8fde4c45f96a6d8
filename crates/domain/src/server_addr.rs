use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Address of a DNS server that may or may not be resolved to an IP yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServerAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl ServerAddr {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            ServerAddr::Resolved(addr) => Some(*addr),
            ServerAddr::Unresolved { .. } => None,
        }
    }

    /// Returns (hostname, port) if this address still needs resolution.
    pub fn unresolved_parts(&self) -> Option<(&str, u16)> {
        match self {
            ServerAddr::Unresolved { hostname, port } => Some((hostname, *port)),
            ServerAddr::Resolved(_) => None,
        }
    }
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerAddr::Resolved(addr) => write!(f, "{}", addr),
            ServerAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}

fn parse_host_port(s: &str) -> Option<(&str, u16)> {
    if s.starts_with('[') {
        let end = s.find(']')?;
        let host = &s[1..end];
        let rest = &s[end + 1..];
        let port_str = rest.strip_prefix(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    } else {
        let (host, port_str) = s.rsplit_once(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    }
}

impl FromStr for ServerAddr {
    type Err = String;

    /// Accepts `IP`, `IP:PORT`, `[IPv6]:PORT`, `HOST` and `HOST:PORT`;
    /// the port defaults to 53.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty server address".to_string());
        }
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(ServerAddr::Resolved(addr));
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(ServerAddr::Resolved(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
        }
        if let Some((host, port)) = parse_host_port(s) {
            if let Ok(ip) = host.parse::<IpAddr>() {
                return Ok(ServerAddr::Resolved(SocketAddr::new(ip, port)));
            }
            if host.is_empty() || host.contains(':') {
                return Err(format!("Invalid server address '{}'", s));
            }
            return Ok(ServerAddr::Unresolved {
                hostname: host.into(),
                port,
            });
        }
        if s.contains(':') || s.contains('/') || s.contains(' ') {
            return Err(format!("Invalid server address '{}'", s));
        }
        Ok(ServerAddr::Unresolved {
            hostname: s.into(),
            port: DEFAULT_DNS_PORT,
        })
    }
}
