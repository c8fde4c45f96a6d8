#![allow(dead_code)]
#![allow(unused_imports)]

mod builders;
mod dns_server_mock;

pub use builders::{a_record, listing_record, response_to, soa_record, txt_record, ZONE};
pub use dns_server_mock::{MockTcpDnsServer, MockUdpDnsServer, ReceivedRequest};
