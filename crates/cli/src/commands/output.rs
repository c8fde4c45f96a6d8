//! Console lines printed for each operation.

use dnsbl_domain::{ListedStatus, ListingReport, ResponseOutcome};
use std::net::Ipv4Addr;

pub fn add_banner(sentinel: Ipv4Addr, owner: &str) -> String {
    format!("Adding type A record \"{}\" for {} :", sentinel, owner)
}

pub fn remove_banner(owner: &str) -> String {
    format!("Removing type A record {} :", owner)
}

pub fn add_result(outcome: &ResponseOutcome) -> String {
    match outcome {
        ResponseOutcome::Success => "NOERROR, Adding to log file".to_string(),
        other => update_result(other),
    }
}

pub fn update_result(outcome: &ResponseOutcome) -> String {
    match outcome {
        ResponseOutcome::Success | ResponseOutcome::AuthorizationRefused(_) => outcome.to_string(),
        ResponseOutcome::Other(code) => format!("Response: {} ({})", outcome, code),
    }
}

pub fn query_report(report: &ListingReport) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(text) = report.annotation() {
        lines.push(format!(
            "Address {}: TXT record for {} => {}",
            report.address, report.query_name, text
        ));
    }

    match (report.status, report.sentinel()) {
        (ListedStatus::Listed, Some(value)) => lines.push(format!(
            "Address {}: A record for {} => {}",
            report.address, report.query_name, value
        )),
        _ => lines.push(format!("Address {} is not listed.", report.address)),
    }

    lines
}

pub fn scan_header(zone: &str) -> String {
    format!("===== AXFR from zone {} =====", zone)
}
