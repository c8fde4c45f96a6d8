//! TSIG (RFC 8945) signing of outgoing updates and transfer requests.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use dnsbl_domain::{DomainError, TsigAlgorithmName, TsigConfig};
use hickory_proto::dnssec::rdata::tsig::TsigAlgorithm;
use hickory_proto::dnssec::tsig::TSigner;
use hickory_proto::op::Message;
use tracing::debug;

use super::message::message_builder::parse_name;

pub fn to_hickory_algorithm(algorithm: TsigAlgorithmName) -> TsigAlgorithm {
    match algorithm {
        TsigAlgorithmName::HmacMd5 => TsigAlgorithm::HmacMd5,
        TsigAlgorithmName::HmacSha1 => TsigAlgorithm::HmacSha1,
        TsigAlgorithmName::HmacSha224 => TsigAlgorithm::HmacSha224,
        TsigAlgorithmName::HmacSha256 => TsigAlgorithm::HmacSha256,
        TsigAlgorithmName::HmacSha384 => TsigAlgorithm::HmacSha384,
        TsigAlgorithmName::HmacSha512 => TsigAlgorithm::HmacSha512,
    }
}

/// Builds the signer for `config`, or `None` when no key is configured.
///
/// Config validation already refuses algorithms ring cannot compute; a
/// config built without validation still fails here rather than at send time.
pub fn build_signer(config: &TsigConfig) -> Result<Option<TSigner>, DomainError> {
    if !config.is_configured() {
        return Ok(None);
    }

    let secret = config.secret.as_deref().unwrap_or_default();
    let key_bytes = BASE64
        .decode(secret.trim())
        .map_err(|e| DomainError::TsigError(format!("Failed to decode TSIG secret: {}", e)))?;

    let key_name = parse_name(&config.key_name)
        .map_err(|e| DomainError::TsigError(format!("Invalid TSIG key name: {}", e)))?;

    let signer = TSigner::new(
        key_bytes,
        to_hickory_algorithm(config.algorithm),
        key_name,
        config.fudge,
    )
    .map_err(|e| {
        DomainError::TsigError(format!(
            "Cannot sign with {}: {}",
            config.algorithm.as_str(),
            e
        ))
    })?;

    debug!(
        key = %config.key_name,
        algorithm = config.algorithm.as_str(),
        "TSIG signer ready"
    );

    Ok(Some(signer))
}

/// Appends a TSIG record to `message`, timestamped now.
pub fn sign_message(message: &mut Message, signer: &TSigner) -> Result<(), DomainError> {
    let now = Utc::now().timestamp();

    message
        .finalize(signer, now as _)
        .map_err(|e| DomainError::TsigError(format!("Failed to sign message: {}", e)))?;

    Ok(())
}
