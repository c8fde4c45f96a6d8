use dnsbl_domain::{DomainError, ResponseOutcome, ReverseLabel, ZoneChange};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::ZoneUpdater;

pub struct RemoveListingUseCase {
    updater: Arc<dyn ZoneUpdater>,
}

impl RemoveListingUseCase {
    pub fn new(updater: Arc<dyn ZoneUpdater>) -> Self {
        Self { updater }
    }

    /// Deletes both RRsets of `address`. Removing an address that was never
    /// listed is not an error.
    #[instrument(skip(self))]
    pub async fn execute(&self, address: IpAddr) -> Result<ResponseOutcome, DomainError> {
        let label = ReverseLabel::from_ip(&address);

        let outcome = self
            .updater
            .apply(&ZoneChange::Delete(label.clone()))
            .await?;

        if outcome.is_success() {
            info!(address = %address, label = %label, "Listing removed");
        } else {
            warn!(address = %address, rcode = outcome.rcode(), "Removal not accepted");
        }

        Ok(outcome)
    }
}
