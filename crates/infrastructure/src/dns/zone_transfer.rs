//! AXFR (RFC 5936) client.

use async_trait::async_trait;
use dnsbl_application::ports::ZoneTransfer;
use dnsbl_domain::{rcode_name, Config, DomainError, RecordType, ServerAddr, ZoneRecord};
use hickory_proto::dnssec::tsig::TSigner;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::message::{MessageBuilder, ResponseParser};
use super::transport::resolver::resolve_server;
use super::transport::tcp::{connect, read_with_length_prefix, send_with_length_prefix};
use super::tsig::{build_signer, sign_message};

/// Streams the full zone from the authoritative server over TCP.
///
/// The transfer is complete once the closing SOA arrives. A refusal, a
/// non-SOA start or a stream that ends early is an error.
pub struct AxfrZoneTransfer {
    server: ServerAddr,
    signer: Option<TSigner>,
    timeout: Duration,
}

impl AxfrZoneTransfer {
    pub fn new(server: ServerAddr, signer: Option<TSigner>, timeout: Duration) -> Self {
        Self {
            server,
            signer,
            timeout,
        }
    }

    /// Requests are signed only with `[transfer] signed = true`.
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let server = config
            .zone
            .server_addr()
            .map_err(DomainError::ConfigError)?;

        let signer = if config.transfer.signed {
            let signer = build_signer(&config.tsig)?;
            if signer.is_none() {
                warn!("Signed transfer requested but no TSIG key is configured");
            }
            signer
        } else {
            None
        };

        Ok(Self::new(
            server,
            signer,
            Duration::from_secs(config.zone.timeout_secs),
        ))
    }

    async fn stream_zone(&self, zone: &str) -> Result<Vec<ZoneRecord>, DomainError> {
        let mut message = MessageBuilder::build_axfr(zone)?;
        let id = message.id();
        if let Some(signer) = &self.signer {
            sign_message(&mut message, signer)?;
        }
        let request = MessageBuilder::serialize_message(&message)?;

        let server_addr = resolve_server(&self.server, self.timeout).await?;
        let mut stream = connect(server_addr).await?;
        send_with_length_prefix(&mut stream, &request, server_addr).await?;

        debug!(server = %server_addr, zone = %zone, signed = self.signer.is_some(), "AXFR requested");

        let mut records = Vec::new();
        let mut soa_seen = 0usize;
        let mut messages = 0usize;

        while soa_seen < 2 {
            let bytes = read_with_length_prefix(&mut stream, server_addr)
                .await
                .map_err(|e| transfer_failed(zone, format!("stream ended early: {}", e)))?;
            messages += 1;

            let response = ResponseParser::parse(&bytes)?;
            response.ensure_id(id)?;

            if !response.is_success() {
                return Err(transfer_failed(
                    zone,
                    format!("server answered {}", rcode_name(response.rcode)),
                ));
            }

            if messages == 1 && response.answers.is_empty() {
                return Err(transfer_failed(zone, "empty response".to_string()));
            }

            for record in response.answers {
                if records.is_empty() && soa_seen == 0 && record.record_type != RecordType::SOA {
                    return Err(transfer_failed(
                        zone,
                        format!("first record is {}, expected SOA", record.record_type),
                    ));
                }

                if record.record_type == RecordType::SOA {
                    soa_seen += 1;
                    if soa_seen == 2 {
                        break;
                    }
                }
                records.push(record);
            }
        }

        debug!(zone = %zone, messages = messages, records = records.len(), "AXFR stream complete");

        Ok(records)
    }
}

#[async_trait]
impl ZoneTransfer for AxfrZoneTransfer {
    async fn transfer(&self, zone: &str) -> Result<Vec<ZoneRecord>, DomainError> {
        let records = tokio::time::timeout(self.timeout, self.stream_zone(zone))
            .await
            .map_err(|_| {
                transfer_failed(
                    zone,
                    format!("no complete transfer within {}s", self.timeout.as_secs()),
                )
            })?
            .map_err(|e| match e {
                DomainError::ZoneTransferFailed { .. } => e,
                other => transfer_failed(zone, other.to_string()),
            })?;

        info!(server = %self.server, zone = %zone, records = records.len(), "Zone transferred");

        Ok(records)
    }
}

fn transfer_failed(zone: &str, reason: String) -> DomainError {
    DomainError::ZoneTransferFailed {
        zone: zone.to_string(),
        reason,
    }
}
