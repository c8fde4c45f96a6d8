use super::{io_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsbl_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const MAX_TCP_MESSAGE_SIZE: usize = 65535;

/// One-shot DNS over TCP: a fresh connection per message, closed on drop.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server_addr = self.server_addr;

        let response_bytes = tokio::time::timeout(timeout, async {
            let mut stream = connect(server_addr).await?;
            send_with_length_prefix(&mut stream, message_bytes, server_addr).await?;

            debug!(
                server = %server_addr,
                message_len = message_bytes.len(),
                "TCP query sent"
            );

            read_with_length_prefix(&mut stream, server_addr).await
        })
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: server_addr.to_string(),
        })??;

        debug!(
            server = %server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
        })
    }
}

pub(crate) async fn connect(server_addr: SocketAddr) -> Result<TcpStream, DomainError> {
    let stream = TcpStream::connect(server_addr)
        .await
        .map_err(|e| io_error(server_addr, e))?;

    stream
        .set_nodelay(true)
        .map_err(|e| io_error(server_addr, e))?;

    Ok(stream)
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
    server_addr: SocketAddr,
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| DomainError::TransportError {
        server: server_addr.to_string(),
        reason: format!("Message too large: {} bytes", message_bytes.len()),
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| io_error(server_addr, e))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| io_error(server_addr, e))?;
    stream.flush().await.map_err(|e| io_error(server_addr, e))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(
    stream: &mut S,
    server_addr: SocketAddr,
) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            DomainError::TransportConnectionReset {
                server: server_addr.to_string(),
            }
        } else {
            io_error(server_addr, e)
        }
    })?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    if response_len > MAX_TCP_MESSAGE_SIZE {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Response too large: {} bytes (max {})",
            response_len, MAX_TCP_MESSAGE_SIZE
        )));
    }

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| io_error(server_addr, e))?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_length_prefix_framing() {
        let server: SocketAddr = "127.0.0.1:53".parse().unwrap();
        let mut wire = Vec::new();
        send_with_length_prefix(&mut wire, &[0xab, 0xcd, 0xef], server)
            .await
            .unwrap();
        assert_eq!(wire, vec![0x00, 0x03, 0xab, 0xcd, 0xef]);

        let mut reader = wire.as_slice();
        let body = read_with_length_prefix(&mut reader, server).await.unwrap();
        assert_eq!(body, vec![0xab, 0xcd, 0xef]);
    }

    #[tokio::test]
    async fn test_eof_before_length_is_connection_reset() {
        let server: SocketAddr = "127.0.0.1:53".parse().unwrap();
        let mut reader: &[u8] = &[];
        let result = read_with_length_prefix(&mut reader, server).await;
        assert!(matches!(
            result,
            Err(DomainError::TransportConnectionReset { .. })
        ));
    }
}
