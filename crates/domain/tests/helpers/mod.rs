#![allow(dead_code)]
use chrono::{DateTime, TimeZone, Utc};
use dnsbl_domain::{ListingRecord, RecordType, ZoneRecord, LISTED_SENTINEL, LISTING_TTL};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

pub const ZONE: &str = "bl.example.org";

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
}

pub struct ListingRecordBuilder {
    address: IpAddr,
    sentinel: Ipv4Addr,
    ttl: u32,
    listed_at: DateTime<Utc>,
}

impl ListingRecordBuilder {
    pub fn new() -> Self {
        Self {
            address: IpAddr::from_str("192.0.2.10").unwrap(),
            sentinel: LISTED_SENTINEL,
            ttl: LISTING_TTL,
            listed_at: fixed_time(),
        }
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = IpAddr::from_str(address).unwrap();
        self
    }

    pub fn listed_at(mut self, listed_at: DateTime<Utc>) -> Self {
        self.listed_at = listed_at;
        self
    }

    pub fn build(self) -> ListingRecord {
        ListingRecord::new(self.address, self.sentinel, self.ttl, self.listed_at)
    }
}

pub fn a_record(owner: &str, value: &str) -> ZoneRecord {
    ZoneRecord::new(format!("{}.{}", owner, ZONE), LISTING_TTL, RecordType::A, value)
}

pub fn txt_record(owner: &str, text: &str) -> ZoneRecord {
    ZoneRecord::new(
        format!("{}.{}", owner, ZONE),
        LISTING_TTL,
        RecordType::TXT,
        format!("\"{}\"", text),
    )
}
