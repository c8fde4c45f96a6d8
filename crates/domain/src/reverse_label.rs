//! Reverse-zone labels for listed addresses.
//!
//! An address is stored in the blocklist zone under the same owner name a PTR
//! lookup would use, minus the `in-addr.arpa` / `ip6.arpa` suffix: the zone
//! name is appended separately.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const IPV6_NIBBLES: usize = 32;

/// Owner name of a listing, relative to the blocklist zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReverseLabel(String);

impl ReverseLabel {
    pub fn from_ip(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(ipv4) => {
                let octets = ipv4.octets();
                Self(format!(
                    "{}.{}.{}.{}",
                    octets[3], octets[2], octets[1], octets[0]
                ))
            }
            IpAddr::V6(ipv6) => {
                let mut nibbles = Vec::with_capacity(IPV6_NIBBLES);
                for byte in ipv6.octets().iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                Self(nibbles.join("."))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fully qualified query name inside `zone`, without the trailing dot.
    pub fn fqdn(&self, zone: &str) -> String {
        format!("{}.{}", self.0, zone.trim_end_matches('.'))
    }

    /// Recovers the forward address from a relative label.
    ///
    /// Accepts the 4-label IPv4 form and the 32-nibble IPv6 form; anything
    /// else (zone apex, unrelated owners) yields `None`.
    pub fn to_ip(label: &str) -> Option<IpAddr> {
        let labels: Vec<&str> = label.trim_end_matches('.').split('.').collect();

        match labels.len() {
            4 => {
                let mut octets = [0u8; 4];
                for (i, part) in labels.iter().rev().enumerate() {
                    octets[i] = part.parse::<u8>().ok()?;
                }
                Some(IpAddr::V4(Ipv4Addr::from(octets)))
            }
            IPV6_NIBBLES => {
                let mut octets = [0u8; 16];
                for (i, pair) in labels.chunks(2).enumerate() {
                    if pair[0].len() != 1 || pair[1].len() != 1 {
                        return None;
                    }
                    let low = u8::from_str_radix(pair[0], 16).ok()?;
                    let high = u8::from_str_radix(pair[1], 16).ok()?;
                    octets[15 - i] = (high << 4) | low;
                }
                Some(IpAddr::V6(Ipv6Addr::from(octets)))
            }
            _ => None,
        }
    }

    /// Strips `zone` from an absolute owner name and decodes the remainder.
    pub fn ip_from_owner(owner: &str, zone: &str) -> Option<IpAddr> {
        let owner = owner.trim_end_matches('.').to_ascii_lowercase();
        let zone = zone.trim_end_matches('.').to_ascii_lowercase();
        let relative = owner.strip_suffix(&zone)?.strip_suffix('.')?;
        Self::to_ip(relative)
    }
}

impl fmt::Display for ReverseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&IpAddr> for ReverseLabel {
    fn from(ip: &IpAddr) -> Self {
        Self::from_ip(ip)
    }
}
