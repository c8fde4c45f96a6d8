use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingLogConfig {
    /// File that receives one line per successful add.
    #[serde(default = "default_listing_log_path")]
    pub path: String,
}

impl Default for ListingLogConfig {
    fn default() -> Self {
        Self {
            path: default_listing_log_path(),
        }
    }
}

fn default_listing_log_path() -> String {
    "/var/log/dnsbl_spamtrap.log".to_string()
}
