use dnsbl_domain::ReverseLabel;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

mod helpers;
use helpers::ZONE;

#[test]
fn test_ipv4_octets_are_reversed() {
    let ip = IpAddr::from_str("1.2.3.4").unwrap();
    assert_eq!(ReverseLabel::from_ip(&ip).as_str(), "4.3.2.1");
}

#[test]
fn test_ipv4_reversal_for_many_addresses() {
    let samples = [
        [0u8, 0, 0, 0],
        [255, 255, 255, 255],
        [10, 20, 30, 40],
        [192, 0, 2, 1],
        [203, 0, 113, 254],
    ];

    for [a, b, c, d] in samples {
        let ip = IpAddr::V4(Ipv4Addr::new(a, b, c, d));
        let label = ReverseLabel::from_ip(&ip);
        assert_eq!(label.as_str(), format!("{}.{}.{}.{}", d, c, b, a));
    }
}

#[test]
fn test_ipv4_round_trip_through_zone_owner() {
    for raw in ["1.2.3.4", "192.0.2.77", "8.8.4.4", "127.0.0.2"] {
        let ip = IpAddr::from_str(raw).unwrap();
        let owner = ReverseLabel::from_ip(&ip).fqdn(ZONE);
        assert_eq!(ReverseLabel::ip_from_owner(&owner, ZONE), Some(ip));
    }
}

#[test]
fn test_ipv6_label_is_32_nibbles() {
    let ip = IpAddr::from_str("2001:db8::1").unwrap();
    let label = ReverseLabel::from_ip(&ip);

    let nibbles: Vec<&str> = label.as_str().split('.').collect();
    assert_eq!(nibbles.len(), 32);
    assert!(nibbles.iter().all(|n| n.len() == 1));
    assert!(!label.as_str().contains("ip6.arpa"));
}

#[test]
fn test_ipv6_label_matches_pointer_form() {
    let ip = IpAddr::from_str("2001:db8::567:89ab").unwrap();
    let label = ReverseLabel::from_ip(&ip);

    assert_eq!(
        label.as_str(),
        "b.a.9.8.7.6.5.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2"
    );
}

#[test]
fn test_ipv6_round_trip() {
    for raw in ["::1", "2001:db8::1", "fe80::1ff:fe23:4567:890a", "ffff::ffff"] {
        let ip = IpAddr::from_str(raw).unwrap();
        let label = ReverseLabel::from_ip(&ip);
        assert_eq!(ReverseLabel::to_ip(label.as_str()), Some(ip));
    }
}

#[test]
fn test_labels_are_distinct_per_address() {
    let a = ReverseLabel::from_ip(&IpAddr::V6(Ipv6Addr::from_str("2001:db8::1").unwrap()));
    let b = ReverseLabel::from_ip(&IpAddr::V6(Ipv6Addr::from_str("2001:db8::10").unwrap()));
    assert_ne!(a, b);
}

#[test]
fn test_fqdn_appends_zone() {
    let ip = IpAddr::from_str("1.2.3.4").unwrap();
    assert_eq!(
        ReverseLabel::from_ip(&ip).fqdn(ZONE),
        "4.3.2.1.bl.example.org"
    );
}

#[test]
fn test_owner_outside_zone_is_not_decoded() {
    assert_eq!(
        ReverseLabel::ip_from_owner("4.3.2.1.other.example.net", ZONE),
        None
    );
    assert_eq!(ReverseLabel::ip_from_owner(ZONE, ZONE), None);
}
