use dnsbl_application::use_cases::QueryListingUseCase;
use std::net::IpAddr;

use super::output;

pub async fn execute(use_case: &QueryListingUseCase, address: IpAddr) -> anyhow::Result<u8> {
    let report = use_case.execute(address).await?;

    for line in output::query_report(&report) {
        println!("{}", line);
    }

    Ok(report.status.exit_code())
}
