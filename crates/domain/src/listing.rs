use crate::reverse_label::ReverseLabel;
use chrono::{DateTime, Utc};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

/// TTL shared by the A and TXT records of a listing.
pub const LISTING_TTL: u32 = 8600;

/// A record value meaning "listed".
pub const LISTED_SENTINEL: Ipv4Addr = Ipv4Addr::new(127, 0, 0, 1);

/// `strftime` pattern used in TXT annotations and in the listing log.
pub const LISTING_DATE_FORMAT: &str = "%Y-%m-%dZ%H:%M:%S";

/// Free-text context supplied by whatever triggered the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingAnnotation {
    /// Trap mailbox that was hit.
    pub trap: Option<String>,
    /// Sending host as reported by the trap.
    pub host: Option<String>,
    /// Envelope sender.
    pub sender: Option<String>,
}

impl ListingAnnotation {
    pub fn new(trap: Option<String>, host: Option<String>, sender: Option<String>) -> Self {
        Self { trap, host, sender }
    }
}

/// The A + TXT pair written for one listed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    pub address: IpAddr,
    pub label: ReverseLabel,
    pub sentinel: Ipv4Addr,
    pub ttl: u32,
    pub listed_at: DateTime<Utc>,
}

impl ListingRecord {
    pub fn new(address: IpAddr, sentinel: Ipv4Addr, ttl: u32, listed_at: DateTime<Utc>) -> Self {
        Self {
            label: ReverseLabel::from_ip(&address),
            address,
            sentinel,
            ttl,
            listed_at,
        }
    }

    pub fn formatted_date(&self) -> String {
        self.listed_at.format(LISTING_DATE_FORMAT).to_string()
    }

    /// Text stored in the TXT record.
    pub fn annotation_text(&self) -> String {
        format!(
            "Address {} added at {} ({})",
            self.address,
            self.listed_at.timestamp(),
            self.formatted_date()
        )
    }
}

/// One atomic change sent to the authoritative server.
///
/// Both variants always touch the A and the TXT RRset together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneChange {
    Replace(ListingRecord),
    Delete(ReverseLabel),
}

impl ZoneChange {
    pub fn owner(&self) -> &ReverseLabel {
        match self {
            ZoneChange::Replace(record) => &record.label,
            ZoneChange::Delete(label) => label,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ZoneChange::Replace(_) => "replace",
            ZoneChange::Delete(_) => "delete",
        }
    }
}

/// Line appended to the listing log after a successful add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLogEntry {
    pub listed_at: DateTime<Utc>,
    pub address: IpAddr,
    pub annotation: ListingAnnotation,
}

impl ListingLogEntry {
    pub fn new(record: &ListingRecord, annotation: ListingAnnotation) -> Self {
        Self {
            listed_at: record.listed_at,
            address: record.address,
            annotation,
        }
    }
}

impl fmt::Display for ListingLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},IP-BANNED={},TRAP={},SENDER-HOST={},SENDER-EMAIL={}",
            self.listed_at.format(LISTING_DATE_FORMAT),
            self.address,
            self.annotation.trap.as_deref().unwrap_or(""),
            self.annotation.host.as_deref().unwrap_or(""),
            self.annotation.sender.as_deref().unwrap_or(""),
        )
    }
}
