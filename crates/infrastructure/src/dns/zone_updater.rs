use async_trait::async_trait;
use dnsbl_application::ports::ZoneUpdater;
use dnsbl_domain::{Config, DomainError, ResponseOutcome, ServerAddr, ZoneChange};
use hickory_proto::dnssec::tsig::TSigner;
use std::time::Duration;
use tracing::{debug, info};

use super::message::{MessageBuilder, ResponseParser};
use super::transport::resolver::resolve_server;
use super::transport::tcp::TcpTransport;
use super::transport::DnsTransport;
use super::tsig::{build_signer, sign_message};

/// Sends RFC 2136 updates over TCP to the authoritative server.
pub struct TsigZoneUpdater {
    server: ServerAddr,
    zone: String,
    signer: Option<TSigner>,
    timeout: Duration,
}

impl TsigZoneUpdater {
    pub fn new(
        server: ServerAddr,
        zone: impl Into<String>,
        signer: Option<TSigner>,
        timeout: Duration,
    ) -> Self {
        Self {
            server,
            zone: zone.into(),
            signer,
            timeout,
        }
    }

    /// Requires a TSIG key; unsigned updates are only possible through `new`.
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let server = config
            .zone
            .server_addr()
            .map_err(DomainError::ConfigError)?;
        let signer = build_signer(&config.tsig)?.ok_or_else(|| {
            DomainError::TsigError(
                "updates need tsig.key_name and a secret (tsig.secret or DNSBL_TSIG_SECRET)"
                    .to_string(),
            )
        })?;

        Ok(Self::new(
            server,
            config.zone.origin(),
            Some(signer),
            Duration::from_secs(config.zone.timeout_secs),
        ))
    }
}

#[async_trait]
impl ZoneUpdater for TsigZoneUpdater {
    async fn apply(&self, change: &ZoneChange) -> Result<ResponseOutcome, DomainError> {
        let mut message = MessageBuilder::build_update(&self.zone, change)?;
        let id = message.id();

        if let Some(signer) = &self.signer {
            sign_message(&mut message, signer)?;
        }

        let bytes = MessageBuilder::serialize_message(&message)?;

        let response = tokio::time::timeout(self.timeout, async {
            let server_addr = resolve_server(&self.server, self.timeout).await?;

            debug!(
                server = %server_addr,
                zone = %self.zone,
                owner = %change.owner(),
                kind = change.kind(),
                signed = self.signer.is_some(),
                "Sending update"
            );

            TcpTransport::new(server_addr).send(&bytes, self.timeout).await
        })
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: self.server.to_string(),
        })??;

        let parsed = ResponseParser::parse(&response.bytes)?;
        parsed.ensure_id(id)?;

        let outcome = ResponseOutcome::from_rcode(parsed.rcode);

        info!(
            server = %self.server,
            owner = %change.owner(),
            kind = change.kind(),
            rcode = %outcome,
            "Update answered"
        );

        Ok(outcome)
    }
}
