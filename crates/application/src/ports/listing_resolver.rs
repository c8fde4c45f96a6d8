use async_trait::async_trait;
use dnsbl_domain::{LookupResult, RecordType};

#[async_trait]
pub trait ListingResolver: Send + Sync {
    /// Looks up `record_type` at the absolute `name`.
    async fn lookup(&self, name: &str, record_type: RecordType) -> LookupResult;
}
