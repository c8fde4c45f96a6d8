pub mod listing_resolver;
pub mod message;
pub mod transport;
pub mod tsig;
pub mod zone_transfer;
pub mod zone_updater;

pub use listing_resolver::StubListingResolver;
pub use zone_transfer::AxfrZoneTransfer;
pub use zone_updater::TsigZoneUpdater;
