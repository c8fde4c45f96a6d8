use dnsbl_domain::{DomainError, ListedSignature, ZoneNode};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ZoneTransfer;

pub struct ScanZoneUseCase {
    transfer: Arc<dyn ZoneTransfer>,
    zone: String,
    signature: ListedSignature,
}

impl ScanZoneUseCase {
    pub fn new(
        transfer: Arc<dyn ZoneTransfer>,
        zone: impl Into<String>,
        signature: ListedSignature,
    ) -> Self {
        Self {
            transfer,
            zone: zone.into(),
            signature,
        }
    }

    /// Transfers the zone and returns the rendered nodes carrying a listing.
    ///
    /// A failed transfer is an error; an empty iterator always means the
    /// zone held no listings.
    #[instrument(skip(self), fields(zone = %self.zone))]
    pub async fn execute(&self) -> Result<ListedEntries, DomainError> {
        let records = self.transfer.transfer(&self.zone).await?;
        let nodes = ZoneNode::group(records);

        info!(nodes = nodes.len(), "Zone transferred");

        Ok(ListedEntries {
            nodes: nodes.into_iter(),
            zone: self.zone.clone(),
            signature: self.signature.clone(),
        })
    }
}

/// Rendered text of each listed node, filtered as it is consumed.
pub struct ListedEntries {
    nodes: std::vec::IntoIter<ZoneNode>,
    zone: String,
    signature: ListedSignature,
}

impl Iterator for ListedEntries {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let signature = &self.signature;
        self.nodes
            .by_ref()
            .find(|node| signature.matches(node))
            .map(|node| node.render(&self.zone))
    }
}
