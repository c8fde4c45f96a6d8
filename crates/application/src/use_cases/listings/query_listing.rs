use dnsbl_domain::{
    DomainError, ListedStatus, ListingReport, LookupResult, RecordType, ReverseLabel,
    TransportErrorPolicy,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::ListingResolver;

pub struct QueryListingUseCase {
    resolver: Arc<dyn ListingResolver>,
    zone: String,
    on_transport_error: TransportErrorPolicy,
}

impl QueryListingUseCase {
    pub fn new(
        resolver: Arc<dyn ListingResolver>,
        zone: impl Into<String>,
        on_transport_error: TransportErrorPolicy,
    ) -> Self {
        Self {
            resolver,
            zone: zone.into(),
            on_transport_error,
        }
    }

    /// Listed if and only if the A lookup returned an answer.
    ///
    /// The TXT lookup is informational. With `TransportErrorPolicy::NotListed`
    /// an A lookup that never got an answer counts as absent, which can hide
    /// an unreachable resolver behind a "not listed" result.
    #[instrument(skip(self))]
    pub async fn execute(&self, address: IpAddr) -> Result<ListingReport, DomainError> {
        let query_name = ReverseLabel::from_ip(&address).fqdn(&self.zone);

        let (address_lookup, text_lookup) = tokio::join!(
            self.resolver.lookup(&query_name, RecordType::A),
            self.resolver.lookup(&query_name, RecordType::TXT),
        );

        if let LookupResult::TransportError(reason) = &address_lookup {
            match self.on_transport_error {
                TransportErrorPolicy::NotListed => {
                    warn!(
                        name = %query_name,
                        reason = %reason,
                        "A lookup failed, reporting address as not listed"
                    );
                }
                TransportErrorPolicy::Fail => {
                    return Err(DomainError::LookupFailed {
                        name: query_name,
                        reason: reason.clone(),
                    });
                }
            }
        }

        let status = if address_lookup.is_found() {
            ListedStatus::Listed
        } else {
            ListedStatus::NotListed
        };

        debug!(
            name = %query_name,
            status = ?status,
            txt = ?text_lookup.first(),
            "Listing query finished"
        );

        Ok(ListingReport {
            address,
            query_name,
            status,
            address_lookup,
            text_lookup,
        })
    }
}
