//! CLI for looking up the vendor of MAC addresses
//!
//! # Examples
//!
//! ```bash
//! # vendor of a single address
//! ouilookup --mac 98:06:3c:92:ff:c5
//!
//! # vendors of every host in the ARP table
//! ouilookup --arp
//!
//! # lookups for a fixed set of sample addresses
//! ouilookup --test
//! ```
use clap::Parser;
use color_eyre::eyre::Result;
use log::*;
use ouilookup_lib::{
    config::LookupConfig,
    neighbors::{self, NeighborTableSource, SystemNeighborTable},
    self_test,
    vendor::{self, MacLookupClient, VendorLookupClient},
};
use std::{
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

#[doc(hidden)]
const USAGE: &str = "\
Use: ouilookup --mac <mac> | --arp | [--help]
--mac: MAC a consultar. P.e. aa:bb:cc:00:00:00
--arp: muestra los fabricantes de los hosts disponibles en la tabla ARP
--help: muestra este mensaje y termina.";

#[doc(hidden)]
const USAGE_ERROR_STATUS: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "ouilookup",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true,
    infer_long_args = true
)]
/// CLI for looking up the vendor of MAC addresses
struct Args {
    /// MAC address to look up, taken verbatim even when it starts with `-`
    #[arg(long, value_name = "MAC", allow_hyphen_values = true)]
    mac: Option<String>,

    /// Look up the vendor of every host in the ARP table
    #[arg(long, default_value_t = false)]
    arp: bool,

    /// Look up a fixed set of sample addresses
    #[arg(long, default_value_t = false)]
    test: bool,

    /// Print usage and exit
    #[arg(long = "help", default_value_t = false)]
    show_help: bool,

    /// Stray operands, accepted and ignored
    #[arg(hide = true)]
    operands: Vec<String>,
}

/// What a single invocation does. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RunConfig {
    Help,
    Lookup(String),
    ArpSweep,
    SelfTest,
    Usage,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        if args.show_help {
            return RunConfig::Help;
        }

        // address lookup > arp sweep > self test > usage
        match args.mac.filter(|m| !m.is_empty()) {
            Some(mac) => RunConfig::Lookup(mac),
            None if args.arp => RunConfig::ArpSweep,
            None if args.test => RunConfig::SelfTest,
            None => RunConfig::Usage,
        }
    }
}

#[doc(hidden)]
fn initialize_logger() -> Result<()> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Warn,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn parse_args<I, T>(argv: I) -> std::result::Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(argv)?;

    if !args.operands.is_empty() {
        debug!("ignoring operands: {:?}", args.operands);
    }

    Ok(RunConfig::from(args))
}

#[doc(hidden)]
fn print_usage(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", USAGE)
}

#[doc(hidden)]
fn dispatch(
    config: &RunConfig,
    client: &dyn VendorLookupClient,
    source: &dyn NeighborTableSource,
    out: &mut dyn Write,
) -> Result<u8> {
    debug!("running with {:?}", config);

    match config {
        RunConfig::Lookup(mac) => {
            vendor::report(client, mac, out)?;
        }
        RunConfig::ArpSweep => {
            neighbors::sweep(source, client, out)?;
        }
        RunConfig::SelfTest => {
            self_test::run_self_test(client, out)?;
        }
        RunConfig::Help | RunConfig::Usage => {
            print_usage(out)?;
        }
    }

    Ok(0)
}

#[doc(hidden)]
fn run<I, T>(
    argv: I,
    client: &dyn VendorLookupClient,
    source: &dyn NeighborTableSource,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = match parse_args(argv) {
        Ok(config) => config,
        Err(e) => {
            let message = e.to_string();
            writeln!(err, "{}", message.lines().next().unwrap_or_default())?;
            print_usage(out)?;
            return Ok(USAGE_ERROR_STATUS);
        }
    };

    dispatch(&config, client, source, out)
}

#[doc(hidden)]
fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    initialize_logger()?;

    let client = MacLookupClient::new(LookupConfig::builder().build()?);
    let source = SystemNeighborTable::new();

    let status = run(
        std::env::args_os(),
        &client,
        &source,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(ExitCode::from(status))
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
