pub mod listings;

// Re-export use cases
pub use listings::{
    AddListingOutcome, AddListingUseCase, ListedEntries, QueryListingUseCase,
    RemoveListingUseCase, ScanZoneUseCase,
};
