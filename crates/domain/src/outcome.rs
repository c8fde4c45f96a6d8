use std::fmt;
use std::net::IpAddr;

const RCODE_NOERROR: u16 = 0;
const RCODE_REFUSED: u16 = 5;
const RCODE_NOTAUTH: u16 = 9;

/// Classification of the authoritative server's answer to an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Success,
    AuthorizationRefused(u16),
    Other(u16),
}

impl ResponseOutcome {
    /// NOTAUTH is grouped with REFUSED: BIND answers a bad TSIG signature
    /// with NOTAUTH and an unauthorised key with REFUSED.
    pub fn from_rcode(rcode: u16) -> Self {
        match rcode {
            RCODE_NOERROR => ResponseOutcome::Success,
            RCODE_REFUSED | RCODE_NOTAUTH => ResponseOutcome::AuthorizationRefused(rcode),
            other => ResponseOutcome::Other(other),
        }
    }

    pub fn rcode(&self) -> u16 {
        match self {
            ResponseOutcome::Success => RCODE_NOERROR,
            ResponseOutcome::AuthorizationRefused(code) | ResponseOutcome::Other(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success)
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ResponseOutcome::Success => 0,
            ResponseOutcome::AuthorizationRefused(_) => 1,
            ResponseOutcome::Other(_) => 2,
        }
    }
}

impl fmt::Display for ResponseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(rcode_name(self.rcode()))
    }
}

pub fn rcode_name(rcode: u16) -> &'static str {
    match rcode {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        6 => "YXDOMAIN",
        7 => "YXRRSET",
        8 => "NXRRSET",
        9 => "NOTAUTH",
        10 => "NOTZONE",
        16 => "BADSIG",
        17 => "BADKEY",
        18 => "BADTIME",
        _ => "UNKNOWN",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListedStatus {
    Listed,
    NotListed,
}

impl ListedStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            ListedStatus::Listed => 1,
            ListedStatus::NotListed => 0,
        }
    }
}

/// Result of a single resolver lookup.
///
/// Transport failures are kept apart from "no such record" so the caller can
/// decide what an unreachable resolver means for the listing status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(Vec<String>),
    NotFound,
    TransportError(String),
}

impl LookupResult {
    pub fn first(&self) -> Option<&str> {
        match self {
            LookupResult::Found(values) => values.first().map(String::as_str),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(values) if !values.is_empty())
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, LookupResult::TransportError(_))
    }
}

/// Everything learned while checking one address.
#[derive(Debug, Clone)]
pub struct ListingReport {
    pub address: IpAddr,
    pub query_name: String,
    pub status: ListedStatus,
    pub address_lookup: LookupResult,
    pub text_lookup: LookupResult,
}

impl ListingReport {
    pub fn sentinel(&self) -> Option<&str> {
        self.address_lookup.first()
    }

    pub fn annotation(&self) -> Option<&str> {
        self.text_lookup.first()
    }
}
