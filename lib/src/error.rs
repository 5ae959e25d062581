//! Custom Error and Result types for this library

use std::io;
use thiserror::Error;

use crate::config::LookupConfigBuilderError;

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum OuiLookupError {
    /// Transport level failure talking to the vendor lookup service
    #[error("request for {address} failed: {source}")]
    Http {
        /// The address being looked up
        address: String,
        /// The underlying transport error
        #[source]
        source: ureq::Error,
    },

    /// The vendor lookup service answered with a non-success status
    #[error("request for {address} returned status {status}")]
    Status {
        /// The address being looked up
        address: String,
        /// The HTTP status code returned by the service
        status: u16,
    },

    /// The vendor lookup service did not answer in time
    #[error("request for {address} timed out")]
    Timeout {
        /// The address being looked up
        address: String,
    },

    /// The response body could not be interpreted
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The neighbor table command could not be started
    #[error("failed to run `{command}`: {source}")]
    CommandSpawn {
        /// The command line that was attempted
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The neighbor table command ran but exited unsuccessfully
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        /// The command line that was run
        command: String,
        /// Exit status description
        status: String,
        /// Trimmed stderr captured from the command
        stderr: String,
    },

    /// None of the candidate neighbor table commands exist on this host
    #[error("no neighbor table command available (tried: {0})")]
    NoNeighborCommand(String),

    /// Generic I/O error, typically writing the report
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Error resulting from failure to build the lookup configuration
    #[error("failed to build lookup config: {0}")]
    ConfigBuild(#[from] LookupConfigBuilderError),
}

impl OuiLookupError {
    /// Converter for ureq errors that keeps track of the address involved
    pub fn from_http_error(address: &str, error: ureq::Error) -> Self {
        match error {
            ureq::Error::Timeout(_) => Self::Timeout {
                address: address.to_string(),
            },
            ureq::Error::StatusCode(status) => Self::Status {
                address: address.to_string(),
                status,
            },
            source => Self::Http {
                address: address.to_string(),
                source,
            },
        }
    }

    /// Converter for serde_json errors raised while decoding a response
    pub fn from_json_error(error: serde_json::Error) -> Self {
        Self::MalformedResponse(error.to_string())
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`OuiLookupError`]
pub type Result<T> = std::result::Result<T, OuiLookupError>;
