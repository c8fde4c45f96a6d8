//! DNS message construction in wire format using `hickory-proto`.
//!
//! Three kinds of message leave this tool: recursive queries for the
//! listing lookup, RFC 2136 updates for add/remove, and AXFR requests.

use super::record_type_map::RecordTypeMapper;
use dnsbl_domain::{DomainError, ListingRecord, RecordType, ZoneChange};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Recursive query with a random ID. Returns the ID for response matching.
    pub fn build_query(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let mut query = Query::new();
        query.set_name(parse_name(domain)?);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// RFC 2136 update for one listing change.
    ///
    /// The zone section names `zone` with type SOA. A replace is encoded as
    /// "delete RRset" followed by "add RR" for both A and TXT, so repeating
    /// it leaves exactly one record of each type. A delete removes both
    /// RRsets and succeeds when they are already absent.
    pub fn build_update(zone: &str, change: &ZoneChange) -> Result<Message, DomainError> {
        let zone_name = parse_name(zone)?;
        let owner = parse_name(&change.owner().fqdn(zone))?;

        let mut zone_query = Query::new();
        zone_query.set_name(zone_name);
        zone_query.set_query_type(HickoryRecordType::SOA);
        zone_query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Update);
        message.add_query(zone_query);

        message.add_name_server(delete_rrset(owner.clone(), HickoryRecordType::A));
        message.add_name_server(delete_rrset(owner.clone(), HickoryRecordType::TXT));

        if let ZoneChange::Replace(listing) = change {
            for record in listing_records(owner, listing) {
                message.add_name_server(record);
            }
        }

        Ok(message)
    }

    /// Full zone transfer request for `zone`.
    pub fn build_axfr(zone: &str) -> Result<Message, DomainError> {
        let mut query = Query::new();
        query.set_name(parse_name(zone)?);
        query.set_query_type(HickoryRecordType::AXFR);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.add_query(query);

        Ok(message)
    }

    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

/// Absolute name for `domain`, with or without its trailing dot.
pub(crate) fn parse_name(domain: &str) -> Result<Name, DomainError> {
    let absolute = format!("{}.", domain.trim_end_matches('.'));
    Name::from_str(&absolute)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e)))
}

fn delete_rrset(owner: Name, record_type: HickoryRecordType) -> Record {
    let mut record = Record::update0(owner, 0, record_type);
    record.set_dns_class(DNSClass::ANY);
    record
}

fn listing_records(owner: Name, listing: &ListingRecord) -> [Record; 2] {
    [
        Record::from_rdata(owner.clone(), listing.ttl, RData::A(A(listing.sentinel))),
        Record::from_rdata(
            owner,
            listing.ttl,
            RData::TXT(TXT::new(vec![listing.annotation_text()])),
        ),
    ]
}
