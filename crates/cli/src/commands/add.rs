use dnsbl_application::use_cases::AddListingUseCase;
use dnsbl_domain::{ListingAnnotation, ReverseLabel};
use std::net::IpAddr;

use super::output;

pub async fn execute(
    use_case: &AddListingUseCase,
    zone: &str,
    address: IpAddr,
    annotation: ListingAnnotation,
) -> anyhow::Result<u8> {
    let owner = ReverseLabel::from_ip(&address).fqdn(zone);
    println!("{}", output::add_banner(use_case.sentinel(), &owner));

    let added = use_case.execute(address, annotation).await?;
    println!("{}", output::add_result(&added.outcome));

    Ok(added.outcome.exit_code())
}
