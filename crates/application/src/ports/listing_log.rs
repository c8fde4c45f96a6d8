use async_trait::async_trait;
use dnsbl_domain::{DomainError, ListingLogEntry};

#[async_trait]
pub trait ListingLog: Send + Sync {
    async fn append(&self, entry: &ListingLogEntry) -> Result<(), DomainError>;
}
