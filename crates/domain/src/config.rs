pub mod errors;
pub mod listing_log;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod transfer;
pub mod tsig;
pub mod zone;

pub use errors::ConfigError;
pub use listing_log::ListingLogConfig;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, TransportErrorPolicy};
pub use root::{CliOverrides, Config, TSIG_SECRET_ENV};
pub use transfer::TransferConfig;
pub use tsig::{TsigAlgorithmName, TsigConfig};
pub use zone::ZoneConfig;
