use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HMAC algorithms a TSIG key may be configured with.
///
/// All RFC 8945 names parse so a key copied from a BIND `key` clause is
/// recognised, but only [`TsigAlgorithmName::can_sign`] algorithms pass
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TsigAlgorithmName {
    HmacMd5,
    HmacSha1,
    HmacSha224,
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

impl TsigAlgorithmName {
    /// Wire name of the algorithm (RFC 8945 §6).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HmacMd5 => "hmac-md5.sig-alg.reg.int",
            Self::HmacSha1 => "hmac-sha1",
            Self::HmacSha224 => "hmac-sha224",
            Self::HmacSha256 => "hmac-sha256",
            Self::HmacSha384 => "hmac-sha384",
            Self::HmacSha512 => "hmac-sha512",
        }
    }

    /// Whether the ring HMAC backend can compute this MAC.
    pub fn can_sign(&self) -> bool {
        matches!(self, Self::HmacSha256 | Self::HmacSha384 | Self::HmacSha512)
    }
}

impl FromStr for TsigAlgorithmName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('.').to_ascii_lowercase().as_str() {
            "hmac-md5" | "hmac-md5.sig-alg.reg.int" => Ok(Self::HmacMd5),
            "hmac-sha1" => Ok(Self::HmacSha1),
            "hmac-sha224" => Ok(Self::HmacSha224),
            "hmac-sha256" => Ok(Self::HmacSha256),
            "hmac-sha384" => Ok(Self::HmacSha384),
            "hmac-sha512" => Ok(Self::HmacSha512),
            _ => Err(format!("Unknown TSIG algorithm '{}'", s)),
        }
    }
}

impl TryFrom<String> for TsigAlgorithmName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TsigAlgorithmName> for String {
    fn from(value: TsigAlgorithmName) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TsigAlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct TsigConfig {
    #[serde(default)]
    pub key_name: String,

    /// Base64 shared secret. Usually supplied through the environment.
    #[serde(default, skip_serializing)]
    pub secret: Option<String>,

    #[serde(default = "default_algorithm")]
    pub algorithm: TsigAlgorithmName,

    /// Allowed clock skew in seconds.
    #[serde(default = "default_fudge")]
    pub fudge: u16,
}

impl TsigConfig {
    pub fn is_configured(&self) -> bool {
        !self.key_name.is_empty() && self.secret.as_deref().is_some_and(|s| !s.is_empty())
    }
}

impl fmt::Debug for TsigConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TsigConfig")
            .field("key_name", &self.key_name)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("algorithm", &self.algorithm)
            .field("fudge", &self.fudge)
            .finish()
    }
}

impl Default for TsigConfig {
    fn default() -> Self {
        Self {
            key_name: String::new(),
            secret: None,
            algorithm: default_algorithm(),
            fudge: default_fudge(),
        }
    }
}

fn default_algorithm() -> TsigAlgorithmName {
    TsigAlgorithmName::HmacSha256
}

fn default_fudge() -> u16 {
    300
}
