use async_trait::async_trait;
use dnsbl_domain::{DomainError, ResponseOutcome, ZoneChange};

/// Authenticated dynamic-update channel to the authoritative server.
///
/// Each call opens its own session; nothing is reused between calls.
/// `Ok` carries the classified server answer, `Err` means no answer was
/// obtained (connect, send or receive failed, or the reply was unreadable).
#[async_trait]
pub trait ZoneUpdater: Send + Sync {
    async fn apply(&self, change: &ZoneChange) -> Result<ResponseOutcome, DomainError>;
}
