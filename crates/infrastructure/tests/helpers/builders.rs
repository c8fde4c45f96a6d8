use chrono::{TimeZone, Utc};
use dnsbl_domain::{ListingRecord, LISTED_SENTINEL, LISTING_TTL};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

pub const ZONE: &str = "bl.example.org";

fn name(owner: &str) -> Name {
    if owner == "@" {
        Name::from_str(&format!("{}.", ZONE)).unwrap()
    } else {
        Name::from_str(&format!("{}.{}.", owner, ZONE)).unwrap()
    }
}

pub fn soa_record() -> Record {
    let soa = SOA::new(
        Name::from_str("ns1.example.org.").unwrap(),
        Name::from_str("hostmaster.example.org.").unwrap(),
        2024030901,
        3600,
        600,
        86400,
        300,
    );
    Record::from_rdata(name("@"), 3600, RData::SOA(soa))
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), LISTING_TTL, RData::A(A(ip)))
}

pub fn txt_record(owner: &str, text: &str) -> Record {
    Record::from_rdata(
        name(owner),
        LISTING_TTL,
        RData::TXT(TXT::new(vec![text.to_string()])),
    )
}

/// Response echoing the request's ID, opcode and question.
pub fn response_to(request: &Message, rcode: ResponseCode, answers: Vec<Record>) -> Message {
    let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
    for query in request.queries() {
        response.add_query(query.clone());
    }
    response.set_response_code(rcode);
    for answer in answers {
        response.add_answer(answer);
    }
    response
}

pub fn listing_record(address: &str) -> ListingRecord {
    ListingRecord::new(
        IpAddr::from_str(address).unwrap(),
        LISTED_SENTINEL,
        LISTING_TTL,
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
    )
}
