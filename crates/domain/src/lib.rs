//! DNSBL Domain Layer
pub mod config;
pub mod errors;
pub mod listing;
pub mod outcome;
pub mod record_type;
pub mod reverse_label;
pub mod server_addr;
pub mod zone_record;

pub use config::{
    CliOverrides, Config, ConfigError, ResolverConfig, TransportErrorPolicy, TsigAlgorithmName,
    TsigConfig,
};
pub use errors::DomainError;
pub use listing::{
    ListingAnnotation, ListingLogEntry, ListingRecord, ZoneChange, LISTED_SENTINEL,
    LISTING_DATE_FORMAT, LISTING_TTL,
};
pub use outcome::{rcode_name, ListedStatus, ListingReport, LookupResult, ResponseOutcome};
pub use record_type::RecordType;
pub use reverse_label::ReverseLabel;
pub use server_addr::{ServerAddr, DEFAULT_DNS_PORT};
pub use zone_record::{ListedSignature, ZoneNode, ZoneRecord};
