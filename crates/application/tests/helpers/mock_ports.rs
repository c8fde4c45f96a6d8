use async_trait::async_trait;
use dnsbl_application::ports::{ListingLog, ListingResolver, ZoneTransfer, ZoneUpdater};
use dnsbl_domain::{
    DomainError, ListingLogEntry, LookupResult, RecordType, ResponseOutcome, ZoneChange,
    ZoneRecord,
};
use std::sync::{Arc, Mutex, RwLock};

pub const ZONE: &str = "bl.example.org";

/// Zone contents shared by the mock updater, resolver and transfer so that
/// writes are visible to later reads, like on a real authoritative server.
#[derive(Clone, Default)]
pub struct MockZone {
    records: Arc<RwLock<Vec<ZoneRecord>>>,
    rcode: Arc<RwLock<u16>>,
    unreachable: Arc<RwLock<bool>>,
    updates: Arc<Mutex<Vec<ZoneChange>>>,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ZoneRecord>) -> Self {
        let zone = Self::new();
        *zone.records.write().unwrap() = records;
        zone
    }

    /// Makes the server answer every update with `rcode` without applying it.
    pub fn set_rcode(&self, rcode: u16) {
        *self.rcode.write().unwrap() = rcode;
    }

    /// Makes every network operation fail before reaching the server.
    pub fn set_unreachable(&self, unreachable: bool) {
        *self.unreachable.write().unwrap() = unreachable;
    }

    pub fn records(&self) -> Vec<ZoneRecord> {
        self.records.read().unwrap().clone()
    }

    pub fn records_at(&self, owner: &str, record_type: RecordType) -> Vec<ZoneRecord> {
        self.records
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.owner.eq_ignore_ascii_case(owner) && r.record_type == record_type)
            .cloned()
            .collect()
    }

    pub fn updates(&self) -> Vec<ZoneChange> {
        self.updates.lock().unwrap().clone()
    }

    fn is_unreachable(&self) -> bool {
        *self.unreachable.read().unwrap()
    }

    fn apply(&self, change: &ZoneChange) -> u16 {
        self.updates.lock().unwrap().push(change.clone());

        let rcode = *self.rcode.read().unwrap();
        if rcode != 0 {
            return rcode;
        }

        let owner = change.owner().fqdn(ZONE);
        let mut records = self.records.write().unwrap();
        records.retain(|r| {
            !(r.owner.eq_ignore_ascii_case(&owner)
                && matches!(r.record_type, RecordType::A | RecordType::TXT))
        });

        if let ZoneChange::Replace(listing) = change {
            records.push(ZoneRecord::new(
                owner.clone(),
                listing.ttl,
                RecordType::A,
                listing.sentinel.to_string(),
            ));
            records.push(ZoneRecord::new(
                owner,
                listing.ttl,
                RecordType::TXT,
                format!("\"{}\"", listing.annotation_text()),
            ));
        }

        0
    }
}

pub struct MockZoneUpdater {
    zone: MockZone,
}

impl MockZoneUpdater {
    pub fn new(zone: MockZone) -> Self {
        Self { zone }
    }
}

#[async_trait]
impl ZoneUpdater for MockZoneUpdater {
    async fn apply(&self, change: &ZoneChange) -> Result<ResponseOutcome, DomainError> {
        if self.zone.is_unreachable() {
            return Err(DomainError::TransportConnectionRefused {
                server: "192.0.2.53:53".to_string(),
            });
        }
        Ok(ResponseOutcome::from_rcode(self.zone.apply(change)))
    }
}

pub struct MockListingResolver {
    zone: MockZone,
}

impl MockListingResolver {
    pub fn new(zone: MockZone) -> Self {
        Self { zone }
    }
}

#[async_trait]
impl ListingResolver for MockListingResolver {
    async fn lookup(&self, name: &str, record_type: RecordType) -> LookupResult {
        if self.zone.is_unreachable() {
            return LookupResult::TransportError(format!(
                "Timeout waiting for UDP response for {}",
                name
            ));
        }

        let values: Vec<String> = self
            .zone
            .records_at(name, record_type)
            .into_iter()
            .map(|r| r.data)
            .collect();

        if values.is_empty() {
            LookupResult::NotFound
        } else {
            LookupResult::Found(values)
        }
    }
}

pub struct MockZoneTransfer {
    zone: MockZone,
}

impl MockZoneTransfer {
    pub fn new(zone: MockZone) -> Self {
        Self { zone }
    }
}

#[async_trait]
impl ZoneTransfer for MockZoneTransfer {
    async fn transfer(&self, zone: &str) -> Result<Vec<ZoneRecord>, DomainError> {
        if self.zone.is_unreachable() {
            return Err(DomainError::ZoneTransferFailed {
                zone: zone.to_string(),
                reason: "connection refused".to_string(),
            });
        }
        Ok(self.zone.records())
    }
}

#[derive(Clone, Default)]
pub struct MockListingLog {
    lines: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockListingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingLog for MockListingLog {
    async fn append(&self, entry: &ListingLogEntry) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::ListingLogFailed {
                path: "/var/log/dnsbl_spamtrap.log".to_string(),
                reason: "Permission denied".to_string(),
            });
        }
        self.lines.lock().unwrap().push(entry.to_string());
        Ok(())
    }
}
