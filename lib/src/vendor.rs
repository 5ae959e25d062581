//! Vendor resolution against the maclookup.app service
//!
//! The transport lives behind [`VendorLookupClient`] so the decision logic in
//! [`resolve`] can be exercised without touching the network.

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use std::{fmt::Display, io::Write};
use ureq::Agent;

use crate::{
    config::LookupConfig,
    error::{OuiLookupError, Result},
};

/// Printed in place of a vendor when the service knows nothing about the
/// address
pub const NOT_FOUND_LABEL: &str = "No se encontró en la base de datos";

/// Prefix printed in place of a vendor when the lookup failed
pub const ERROR_LABEL: &str = "Error al consultar la MAC";

/// Trait for fetching raw vendor records making it easier to mock in tests
#[cfg_attr(test, automock)]
pub trait VendorLookupClient {
    /// Performs one lookup request for the address and returns the raw
    /// response body
    fn fetch(&self, address: &str) -> Result<String>;
}

/// Blocking HTTP client for the maclookup.app v2 API
pub struct MacLookupClient {
    agent: Agent,
    config: LookupConfig,
}

impl MacLookupClient {
    /// Returns a new client whose requests are bounded by the configured
    /// timeout
    pub fn new(config: LookupConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build()
            .into();

        Self { agent, config }
    }
}

impl VendorLookupClient for MacLookupClient {
    fn fetch(&self, address: &str) -> Result<String> {
        let url = self.config.url_for(address);

        log::debug!("GET {}", url);

        let mut response = self
            .agent
            .get(url.as_str())
            .header("Accept", "application/json")
            .header("User-Agent", self.config.user_agent())
            .call()
            .map_err(|e| OuiLookupError::from_http_error(address, e))?;

        response
            .body_mut()
            .read_to_string()
            .map_err(|e| OuiLookupError::from_http_error(address, e))
    }
}

/// Body returned by the vendor lookup service. Only `company` decides the
/// outcome, the rest is kept for diagnostics.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacLookupResponse {
    /// Whether the service processed the request
    pub success: Option<bool>,
    /// Whether the prefix is present in the vendor database
    pub found: Option<bool>,
    /// The matched vendor prefix, e.g. `98063C`
    pub mac_prefix: Option<String>,
    /// Vendor name
    pub company: Option<String>,
    /// Two letter country code of the vendor
    pub country: Option<String>,
    /// IEEE assignment block type, e.g. `MA-L`
    pub block_type: Option<String>,
}

/// Outcome of a single lookup. Exactly one applies to every address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorOutcome {
    /// The service returned a non-empty vendor name
    Found(String),
    /// The service answered but had no vendor for the address
    NotFound,
    /// The lookup failed, holds the failure description
    Error(String),
}

impl Display for VendorOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VendorOutcome::Found(company) => write!(f, "{}", company),
            VendorOutcome::NotFound => write!(f, "{}", NOT_FOUND_LABEL),
            VendorOutcome::Error(e) => write!(f, "{}: {}", ERROR_LABEL, e),
        }
    }
}

/// The queried address paired with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// The address exactly as it was queried
    pub address: String,
    /// What the service said about it
    pub outcome: VendorOutcome,
}

impl Display for LookupResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MAC address : {}", self.address)?;
        write!(f, "Fabricante  : {}", self.outcome)
    }
}

/// Extracts the vendor from a response body.
///
/// Returns `Ok(None)` when `company` is absent, null or empty. Anything that
/// is not a JSON object is an error.
pub fn parse_vendor(body: &str) -> Result<Option<String>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(OuiLookupError::from_json_error)?;

    if !value.is_object() {
        return Err(OuiLookupError::MalformedResponse(format!(
            "expected a JSON object, got: {}",
            value
        )));
    }

    let response: MacLookupResponse =
        serde_json::from_value(value).map_err(OuiLookupError::from_json_error)?;

    log::debug!("vendor service response: {:?}", response);

    Ok(response.company.filter(|c| !c.is_empty()))
}

/// Looks up one address. Never fails: every transport or decoding problem is
/// folded into [`VendorOutcome::Error`].
pub fn resolve(client: &dyn VendorLookupClient, address: &str) -> LookupResult {
    log::debug!("looking up vendor for {}", address);

    let outcome = match client.fetch(address).and_then(|b| parse_vendor(&b)) {
        Ok(Some(company)) => VendorOutcome::Found(company),
        Ok(None) => VendorOutcome::NotFound,
        Err(e) => {
            log::warn!("vendor lookup for {} failed: {}", address, e);
            VendorOutcome::Error(e.to_string())
        }
    };

    LookupResult {
        address: address.to_string(),
        outcome,
    }
}

/// Resolves the address and writes the two line result block to `out`
pub fn report(
    client: &dyn VendorLookupClient,
    address: &str,
    out: &mut dyn Write,
) -> Result<LookupResult> {
    let result = resolve(client, address);
    writeln!(out, "{}", result)?;
    Ok(result)
}

#[cfg(test)]
#[path = "./vendor_tests.rs"]
mod tests;
