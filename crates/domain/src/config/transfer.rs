use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransferConfig {
    /// Sign the AXFR request with the `[tsig]` key. Off unless the
    /// authoritative server restricts transfers to the key.
    #[serde(default)]
    pub signed: bool,
}
