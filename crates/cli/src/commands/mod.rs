mod add;
mod output;
mod query;
mod remove;
mod scan;

use clap::ValueEnum;
use dnsbl_domain::{Config, ListingAnnotation};
use std::net::IpAddr;

use crate::di::UseCases;

/// Exit status for failures that never got a DNS answer to classify.
pub const EXIT_HARD_FAILURE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Add the address to the zone
    #[value(name = "a", alias = "add")]
    Add,
    /// Remove the address from the zone
    #[value(name = "r", alias = "remove")]
    Remove,
    /// Check whether the address is listed
    #[value(name = "q", alias = "query")]
    Query,
    /// Transfer the zone and print every listing
    #[value(name = "x", alias = "scan")]
    Scan,
}

impl Operation {
    pub fn needs_address(&self) -> bool {
        !matches!(self, Operation::Scan)
    }
}

/// Runs one operation and returns the process exit status.
pub async fn run(
    operation: Operation,
    address: Option<IpAddr>,
    annotation: ListingAnnotation,
    config: &Config,
) -> anyhow::Result<u8> {
    let use_cases = UseCases::new(config);
    let zone = config.zone.origin();

    match (operation, address) {
        (Operation::Add, Some(address)) => {
            add::execute(&use_cases.add_listing()?, zone, address, annotation).await
        }
        (Operation::Remove, Some(address)) => {
            remove::execute(&use_cases.remove_listing()?, zone, address).await
        }
        (Operation::Query, Some(address)) => {
            query::execute(&use_cases.query_listing()?, address).await
        }
        (Operation::Scan, _) => scan::execute(&use_cases.scan_zone()?, zone).await,
        (operation, None) => anyhow::bail!("operation {:?} needs an address", operation),
    }
}
