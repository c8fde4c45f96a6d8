//! Zone contents as seen through a transfer, grouped into nodes.

use crate::record_type::RecordType;
use crate::reverse_label::ReverseLabel;
use std::collections::HashMap;
use std::net::IpAddr;

/// One resource record in presentation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    /// Absolute owner name, without the trailing dot.
    pub owner: String,
    pub ttl: u32,
    pub record_type: RecordType,
    /// RDATA in zone-file syntax (`127.0.0.1`, `"some text"`, ...).
    pub data: String,
}

impl ZoneRecord {
    pub fn new(
        owner: impl Into<String>,
        ttl: u32,
        record_type: RecordType,
        data: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into().trim_end_matches('.').to_string(),
            ttl,
            record_type,
            data: data.into(),
        }
    }
}

/// All records sharing one owner name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneNode {
    pub owner: String,
    pub records: Vec<ZoneRecord>,
}

impl ZoneNode {
    /// Groups records by owner, keeping the order in which owners first appear.
    pub fn group(records: Vec<ZoneRecord>) -> Vec<ZoneNode> {
        let mut nodes: Vec<ZoneNode> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            let owner = record.owner.to_ascii_lowercase();
            match index.get(&owner) {
                Some(&position) => nodes[position].records.push(record),
                None => {
                    index.insert(owner.clone(), nodes.len());
                    nodes.push(ZoneNode {
                        owner,
                        records: vec![record],
                    });
                }
            }
        }

        nodes
    }

    /// Owner relative to `zone`; the apex renders as `@`.
    pub fn relative_owner(&self, zone: &str) -> String {
        let zone = zone.trim_end_matches('.').to_ascii_lowercase();
        if self.owner == zone {
            return "@".to_string();
        }
        self.owner
            .strip_suffix(&zone)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(&self.owner)
            .to_string()
    }

    /// Zone-file text of the node, one line per record.
    pub fn render(&self, zone: &str) -> String {
        let owner = self.relative_owner(zone);
        self.records
            .iter()
            .map(|record| {
                format!(
                    "{} {} IN {} {}",
                    owner, record.ttl, record.record_type, record.data
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn listed_address(&self, zone: &str) -> Option<IpAddr> {
        ReverseLabel::ip_from_owner(&self.owner, zone)
    }
}

/// Marks a node as an active listing: an A record whose value starts with
/// the configured prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedSignature {
    prefix: String,
}

impl ListedSignature {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn matches(&self, node: &ZoneNode) -> bool {
        node.records
            .iter()
            .any(|r| r.record_type == RecordType::A && r.data.starts_with(&self.prefix))
    }
}
