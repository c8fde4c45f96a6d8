use chrono::{DateTime, Utc};
use dnsbl_domain::{
    DomainError, ListingAnnotation, ListingLogEntry, ListingRecord, ResponseOutcome, ZoneChange,
};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::ports::{ListingLog, ZoneUpdater};

#[derive(Debug, Clone)]
pub struct AddListingOutcome {
    pub outcome: ResponseOutcome,
    pub record: ListingRecord,
}

pub struct AddListingUseCase {
    updater: Arc<dyn ZoneUpdater>,
    listing_log: Arc<dyn ListingLog>,
    sentinel: Ipv4Addr,
    ttl: u32,
}

impl AddListingUseCase {
    pub fn new(
        updater: Arc<dyn ZoneUpdater>,
        listing_log: Arc<dyn ListingLog>,
        sentinel: Ipv4Addr,
        ttl: u32,
    ) -> Self {
        Self {
            updater,
            listing_log,
            sentinel,
            ttl,
        }
    }

    /// A record value written for every listing.
    pub fn sentinel(&self) -> Ipv4Addr {
        self.sentinel
    }

    pub async fn execute(
        &self,
        address: IpAddr,
        annotation: ListingAnnotation,
    ) -> Result<AddListingOutcome, DomainError> {
        self.execute_at(address, annotation, Utc::now()).await
    }

    /// Replaces the A and TXT records of `address` in one update and, once
    /// the server accepted it, appends the listing log line.
    #[instrument(skip(self, annotation))]
    pub async fn execute_at(
        &self,
        address: IpAddr,
        annotation: ListingAnnotation,
        now: DateTime<Utc>,
    ) -> Result<AddListingOutcome, DomainError> {
        let record = ListingRecord::new(address, self.sentinel, self.ttl, now);

        let outcome = self
            .updater
            .apply(&ZoneChange::Replace(record.clone()))
            .await?;

        match outcome {
            ResponseOutcome::Success => {
                info!(
                    address = %address,
                    label = %record.label,
                    "Listing added"
                );

                let entry = ListingLogEntry::new(&record, annotation);
                if let Err(e) = self.listing_log.append(&entry).await {
                    error!(error = %e, address = %address, "Failed to write listing log");
                    return Err(e);
                }
            }
            ResponseOutcome::AuthorizationRefused(code) => {
                warn!(address = %address, rcode = code, "Update refused by server");
            }
            ResponseOutcome::Other(code) => {
                warn!(address = %address, rcode = code, "Update rejected by server");
            }
        }

        Ok(AddListingOutcome { outcome, record })
    }
}
