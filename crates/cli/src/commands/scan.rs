use dnsbl_application::use_cases::ScanZoneUseCase;
use tracing::info;

use super::output;

pub async fn execute(use_case: &ScanZoneUseCase, zone: &str) -> anyhow::Result<u8> {
    println!("{}", output::scan_header(zone));

    let mut listed = 0usize;
    for entry in use_case.execute().await? {
        println!("{}", entry);
        listed += 1;
    }

    info!(zone = %zone, listed = listed, "Scan finished");

    Ok(0)
}
