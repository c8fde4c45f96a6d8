use async_trait::async_trait;
use dnsbl_domain::{DomainError, ZoneRecord};

#[async_trait]
pub trait ZoneTransfer: Send + Sync {
    /// Every record of `zone`, in transfer order, closing SOA excluded.
    async fn transfer(&self, zone: &str) -> Result<Vec<ZoneRecord>, DomainError>;
}
