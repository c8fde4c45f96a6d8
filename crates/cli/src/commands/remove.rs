use dnsbl_application::use_cases::RemoveListingUseCase;
use dnsbl_domain::ReverseLabel;
use std::net::IpAddr;

use super::output;

pub async fn execute(
    use_case: &RemoveListingUseCase,
    zone: &str,
    address: IpAddr,
) -> anyhow::Result<u8> {
    let owner = ReverseLabel::from_ip(&address).fqdn(zone);
    println!("{}", output::remove_banner(&owner));

    let outcome = use_case.execute(address).await?;
    println!("{}", output::update_result(&outcome));

    Ok(outcome.exit_code())
}
