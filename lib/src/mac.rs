//! Hardware address extraction and normalization

use itertools::Itertools;
use regex::Regex;
use std::{fmt::Display, sync::LazyLock};

/// Six two-hex-digit octets joined by `:` or `-`. Mixed delimiters match too.
const OCTETS_PATTERN: &str = "[0-9a-fA-F]{2}[:-][0-9a-fA-F]{2}[:-][0-9a-fA-F]{2}\
    [:-][0-9a-fA-F]{2}[:-][0-9a-fA-F]{2}[:-][0-9a-fA-F]{2}";

static SCAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(OCTETS_PATTERN).expect("hardware address pattern is valid")
});

/// Broadcast and IPv4 multicast prefixes in canonical form
const RESERVED_PREFIXES: [&str; 2] = ["ff:ff:ff", "01:00:5e"];

/// A six octet hardware (MAC) address held in canonical form: lowercase hex
/// with `:` delimiters.
///
/// # Examples
///
/// ```
/// # use ouilookup_lib::mac;
/// let macs = mac::extract_addresses("224.0.0.251 at 01-00-5E-00-00-FB");
/// assert_eq!(macs[0].as_str(), "01:00:5e:00:00:fb");
/// assert!(macs[0].is_reserved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HardwareAddress(String);

impl HardwareAddress {
    fn normalize(token: &str) -> Self {
        Self(token.to_ascii_lowercase().replace('-', ":"))
    }

    /// Returns the canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for broadcast (`ff:ff:ff…`) and multicast (`01:00:5e…`)
    /// addresses, which do not identify a single vendor's device
    pub fn is_reserved(&self) -> bool {
        RESERVED_PREFIXES.iter().any(|p| self.0.starts_with(p))
    }
}

impl Display for HardwareAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scans arbitrary text for address shaped substrings.
///
/// Surrounding context is not validated, so any octet shaped token is picked
/// up. Results are normalized before deduplication, meaning `AA-BB-…` and
/// `aa:bb:…` collapse into one entry. The returned list is sorted.
pub fn extract_addresses(text: &str) -> Vec<HardwareAddress> {
    SCAN_PATTERN
        .find_iter(text)
        .map(|m| HardwareAddress::normalize(m.as_str()))
        .unique()
        .sorted()
        .collect()
}

#[cfg(test)]
#[path = "./mac_tests.rs"]
mod tests;
