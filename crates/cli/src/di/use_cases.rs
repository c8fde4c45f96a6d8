use dnsbl_application::use_cases::{
    AddListingUseCase, QueryListingUseCase, RemoveListingUseCase, ScanZoneUseCase,
};
use dnsbl_domain::{Config, DomainError, ListedSignature};
use dnsbl_infrastructure::dns::{AxfrZoneTransfer, StubListingResolver, TsigZoneUpdater};
use dnsbl_infrastructure::listing_log::FileListingLog;
use std::sync::Arc;

/// Builds each use case with its adapters on demand, so an invocation only
/// touches the resources its operation needs.
pub struct UseCases<'a> {
    config: &'a Config,
}

impl<'a> UseCases<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn add_listing(&self) -> Result<AddListingUseCase, DomainError> {
        let updater = Arc::new(TsigZoneUpdater::from_config(self.config)?);
        let listing_log = Arc::new(FileListingLog::new(&self.config.listing_log.path));

        Ok(AddListingUseCase::new(
            updater,
            listing_log,
            self.config.zone.sentinel,
            self.config.zone.ttl,
        ))
    }

    pub fn remove_listing(&self) -> Result<RemoveListingUseCase, DomainError> {
        let updater = Arc::new(TsigZoneUpdater::from_config(self.config)?);
        Ok(RemoveListingUseCase::new(updater))
    }

    pub fn query_listing(&self) -> Result<QueryListingUseCase, DomainError> {
        let resolver = Arc::new(StubListingResolver::from_config(&self.config.resolver)?);

        Ok(QueryListingUseCase::new(
            resolver,
            self.config.zone.origin(),
            self.config.resolver.on_transport_error,
        ))
    }

    pub fn scan_zone(&self) -> Result<ScanZoneUseCase, DomainError> {
        let transfer = Arc::new(AxfrZoneTransfer::from_config(self.config)?);

        Ok(ScanZoneUseCase::new(
            transfer,
            self.config.zone.origin(),
            ListedSignature::new(self.config.zone.listed_prefix.clone()),
        ))
    }
}
