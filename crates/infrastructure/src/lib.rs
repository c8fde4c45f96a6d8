pub mod dns;
pub mod listing_log;
