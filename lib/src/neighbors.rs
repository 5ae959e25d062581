//! Neighbor (ARP) table capture and the vendor sweep over its entries

#[cfg(test)]
use mockall::automock;

use std::{
    io::{self, Write},
    process::Command as ShellCommand,
};

use crate::{
    error::{OuiLookupError, Result},
    mac,
    vendor::{self, LookupResult, VendorLookupClient},
};

/// A command able to list the host's neighbor table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborCommand {
    /// Executable name, resolved through PATH
    pub program: &'static str,
    /// Arguments passed to the executable
    pub args: &'static [&'static str],
}

impl NeighborCommand {
    fn command_line(&self) -> String {
        std::iter::once(self.program)
            .chain(self.args.iter().copied())
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

const ARP: NeighborCommand = NeighborCommand {
    program: "arp",
    args: &["-a"],
};

#[cfg(target_os = "linux")]
const IP_NEIGH: NeighborCommand = NeighborCommand {
    program: "ip",
    args: &["neigh", "show"],
};

#[cfg(target_os = "linux")]
fn default_commands() -> Vec<NeighborCommand> {
    vec![ARP, IP_NEIGH]
}

#[cfg(not(target_os = "linux"))]
fn default_commands() -> Vec<NeighborCommand> {
    vec![ARP]
}

/// Trait for capturing the neighbor table text making it easier to mock in
/// tests
#[cfg_attr(test, automock)]
pub trait NeighborTableSource {
    /// Returns the full text listing of the neighbor table
    fn capture(&self) -> Result<String>;
}

/// Captures the neighbor table by running the host's listing command
///
/// Candidates are tried in order. A candidate that is not installed is
/// skipped; any other failure ends the capture.
pub struct SystemNeighborTable {
    commands: Vec<NeighborCommand>,
}

impl SystemNeighborTable {
    /// Returns a source using the platform's default commands
    pub fn new() -> Self {
        Self {
            commands: default_commands(),
        }
    }

    /// Returns a source using the given candidate commands
    pub fn with_commands(commands: Vec<NeighborCommand>) -> Self {
        Self { commands }
    }
}

impl Default for SystemNeighborTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NeighborTableSource for SystemNeighborTable {
    fn capture(&self) -> Result<String> {
        let mut tried: Vec<String> = Vec::new();

        for cmd in self.commands.iter() {
            let command_line = cmd.command_line();

            log::debug!("running {}", command_line);

            let result = ShellCommand::new(cmd.program).args(cmd.args).output();

            let output = match result {
                Ok(output) => output,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("{} not found, trying next", cmd.program);
                    tried.push(command_line);
                    continue;
                }
                Err(source) => {
                    return Err(OuiLookupError::CommandSpawn {
                        command: command_line,
                        source,
                    });
                }
            };

            if !output.status.success() {
                return Err(OuiLookupError::CommandFailed {
                    command: command_line,
                    status: output.status.to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr)
                        .trim()
                        .to_string(),
                });
            }

            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        Err(OuiLookupError::NoNeighborCommand(tried.join(", ")))
    }
}

/// Prints the neighbor table, then resolves every distinct non reserved
/// address found in it.
///
/// A capture failure is reported as one line and ends the sweep. Lookup
/// failures are reported inline per address. Only writing to `out` can fail.
pub fn sweep(
    source: &dyn NeighborTableSource,
    client: &dyn VendorLookupClient,
    out: &mut dyn Write,
) -> Result<Vec<LookupResult>> {
    let table = match source.capture() {
        Ok(table) => table,
        Err(e) => {
            log::warn!("neighbor table capture failed: {}", e);
            writeln!(out, "Error al obtener la tabla ARP: {}", e)?;
            return Ok(Vec::new());
        }
    };

    writeln!(out, "Tabla ARP:")?;
    writeln!(out, "{}", table)?;

    let mut results = Vec::new();

    for address in mac::extract_addresses(&table) {
        if address.is_reserved() {
            log::debug!("skipping reserved address {}", address);
            continue;
        }

        writeln!(out)?;
        writeln!(out, "Consultando fabricante para la MAC: {}", address)?;
        results.push(vendor::report(client, address.as_str(), out)?);
    }

    Ok(results)
}

#[cfg(test)]
#[path = "./neighbors_tests.rs"]
mod tests;
