//! UDP transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is, without framing. A response with the TC bit set
//! has to be retried over TCP by the caller.

use super::{io_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsbl_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| io_error(self.server_addr, e))?;

        // Connected socket: the kernel drops datagrams from other sources.
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| io_error(self.server_addr, e))?;

        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| io_error(self.server_addr, e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = tokio::time::timeout(timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| io_error(self.server_addr, e))?;

        if bytes_received == MAX_UDP_RESPONSE_SIZE {
            warn!(
                server = %self.server_addr,
                "UDP response filled the receive buffer"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse { bytes: recv_buf })
    }
}
