use dnsbl_domain::{rcode_name, ListedStatus, LookupResult, ResponseOutcome};

#[test]
fn test_noerror_is_success() {
    let outcome = ResponseOutcome::from_rcode(0);
    assert_eq!(outcome, ResponseOutcome::Success);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(outcome.to_string(), "NOERROR");
}

#[test]
fn test_refused_is_authorization_refused() {
    let outcome = ResponseOutcome::from_rcode(5);
    assert_eq!(outcome, ResponseOutcome::AuthorizationRefused(5));
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.to_string(), "REFUSED");
}

#[test]
fn test_notauth_is_authorization_refused() {
    let outcome = ResponseOutcome::from_rcode(9);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.rcode(), 9);
}

#[test]
fn test_other_codes_keep_raw_value() {
    for code in [1u16, 2, 3, 4, 8, 10, 4095] {
        let outcome = ResponseOutcome::from_rcode(code);
        assert_eq!(outcome, ResponseOutcome::Other(code));
        assert_eq!(outcome.exit_code(), 2);
        assert_eq!(outcome.rcode(), code);
    }
}

#[test]
fn test_rcode_names() {
    assert_eq!(rcode_name(2), "SERVFAIL");
    assert_eq!(rcode_name(3), "NXDOMAIN");
    assert_eq!(rcode_name(999), "UNKNOWN");
}

#[test]
fn test_listed_status_exit_codes() {
    assert_eq!(ListedStatus::Listed.exit_code(), 1);
    assert_eq!(ListedStatus::NotListed.exit_code(), 0);
}

#[test]
fn test_lookup_result_helpers() {
    let found = LookupResult::Found(vec!["127.0.0.1".to_string()]);
    assert!(found.is_found());
    assert_eq!(found.first(), Some("127.0.0.1"));

    assert!(!LookupResult::Found(vec![]).is_found());
    assert!(!LookupResult::NotFound.is_found());

    let failed = LookupResult::TransportError("timeout".to_string());
    assert!(failed.is_transport_error());
    assert_eq!(failed.first(), None);
}
