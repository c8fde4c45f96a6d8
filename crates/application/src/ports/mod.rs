mod listing_log;
mod listing_resolver;
mod zone_transfer;
mod zone_updater;

pub use listing_log::ListingLog;
pub use listing_resolver::ListingResolver;
pub use zone_transfer::ZoneTransfer;
pub use zone_updater::ZoneUpdater;
