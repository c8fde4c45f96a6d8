use super::record_type_map::RecordTypeMapper;
use dnsbl_domain::{rcode_name, DomainError, RecordType, ZoneRecord};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use tracing::debug;

const RCODE_NOERROR: u16 = 0;
const RCODE_NXDOMAIN: u16 = 3;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: u16,

    pub truncated: bool,

    pub answers: Vec<ZoneRecord>,
}

impl DnsResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == RCODE_NOERROR
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == RCODE_NXDOMAIN
    }

    pub fn rcode_name(&self) -> &'static str {
        rcode_name(self.rcode)
    }

    /// Answer values of `record_type`, in the order they were received.
    pub fn values_of(&self, record_type: RecordType) -> Vec<String> {
        self.answers
            .iter()
            .filter(|r| r.record_type == record_type)
            .map(|r| r.data.clone())
            .collect()
    }

    /// Fails when the response does not belong to the query `id`.
    pub fn ensure_id(&self, id: u16) -> Result<(), DomainError> {
        if self.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                self.id, id
            )));
        }
        Ok(())
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = u16::from(message.response_code());
        let truncated = message.truncated();
        let answers: Vec<ZoneRecord> = message.answers().iter().map(to_zone_record).collect();

        debug!(
            rcode = rcode_name(rcode),
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }
}

pub(crate) fn to_zone_record(record: &Record) -> ZoneRecord {
    ZoneRecord::new(
        record.name().to_utf8(),
        record.ttl(),
        RecordTypeMapper::from_hickory(record.record_type()),
        rdata_text(record.data()),
    )
}

/// Presentation form of the record data. TXT strings are quoted the way
/// zone files show them.
fn rdata_text(data: &RData) -> String {
    match data {
        RData::A(a) => a.0.to_string(),
        RData::AAAA(aaaa) => aaaa.0.to_string(),
        RData::TXT(txt) => txt
            .txt_data()
            .iter()
            .map(|chunk| format!("\"{}\"", String::from_utf8_lossy(chunk)))
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
