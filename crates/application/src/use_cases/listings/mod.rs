mod add_listing;
mod query_listing;
mod remove_listing;
mod scan_zone;

pub use add_listing::{AddListingOutcome, AddListingUseCase};
pub use query_listing::QueryListingUseCase;
pub use remove_listing::RemoveListingUseCase;
pub use scan_zone::{ListedEntries, ScanZoneUseCase};
