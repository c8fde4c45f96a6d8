use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use dnsbl_domain::{CliOverrides, ListingAnnotation};
use std::net::IpAddr;
use std::process::ExitCode;
use tracing::{debug, error};

mod bootstrap;
mod commands;
mod di;

use commands::{Operation, EXIT_HARD_FAILURE};

#[derive(Parser)]
#[command(name = "dnsbl")]
#[command(version)]
#[command(about = "Add, remove or query IP addresses in a DNSBL zone")]
struct Cli {
    /// Operation: a (add), r (remove), q (query) or x (list the zone)
    #[arg(short = 't', long = "type", value_enum, value_name = "OP")]
    operation: Operation,

    /// IP address to act on (required except with -t x)
    #[arg(short = 'i', long = "ip", value_name = "ADDRESS")]
    ip: Option<IpAddr>,

    /// Trap address that was hit
    #[arg(long, visible_alias = "tr")]
    trap: Option<String>,

    /// Host that triggered the trap
    #[arg(long, visible_alias = "hs")]
    host: Option<String>,

    /// Envelope sender that triggered the trap
    #[arg(short = 's', long)]
    sender: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Blocklist zone
    #[arg(long)]
    zone: Option<String>,

    /// Authoritative server for updates and transfers (host[:port])
    #[arg(long)]
    server: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Listing log file
    #[arg(long, value_name = "FILE")]
    listing_log: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            zone: self.zone.clone(),
            server: self.server.clone(),
            log_level: self.log_level.clone(),
            listing_log: self.listing_log.clone(),
        }
    }

    fn annotation(&self) -> ListingAnnotation {
        ListingAnnotation::new(self.trap.clone(), self.host.clone(), self.sender.clone())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.operation.needs_address() && cli.ip.is_none() {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided:\n  --ip <ADDRESS>",
            )
            .exit();
    }

    let config = match bootstrap::load_config(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_HARD_FAILURE);
        }
    };

    bootstrap::init_logging(&config.logging);
    debug!(
        zone = %config.zone.origin(),
        server = %config.zone.server,
        operation = ?cli.operation,
        "Configuration loaded"
    );

    match commands::run(cli.operation, cli.ip, cli.annotation(), &config).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => operation_failed(&e),
    }
}

/// Logging is up by now, so the failure goes through `tracing` only.
fn operation_failed(error: &anyhow::Error) -> ExitCode {
    error!(error = %format!("{:#}", error), "Operation failed");
    ExitCode::from(EXIT_HARD_FAILURE)
}
