//! Library package for resolving MAC addresses to their vendor
//!
//! Lookups go to the [maclookup.app](https://maclookup.app) v2 API, either for
//! a single address or for every host found in the local ARP table.
//!
//! # Examples
//!
//! ## Single lookup
//!
//! ```no_run
//! use ouilookup_lib::{
//!     config::LookupConfig,
//!     vendor::{self, MacLookupClient},
//! };
//!
//! let client = MacLookupClient::new(LookupConfig::default());
//! let result = vendor::resolve(&client, "98:06:3c:92:ff:c5");
//! println!("{}", result);
//! ```
//!
//! ## ARP table sweep
//!
//! ```no_run
//! use ouilookup_lib::{
//!     config::LookupConfig,
//!     neighbors::{self, SystemNeighborTable},
//!     vendor::MacLookupClient,
//! };
//!
//! let client = MacLookupClient::new(LookupConfig::default());
//! let source = SystemNeighborTable::new();
//! neighbors::sweep(&source, &client, &mut std::io::stdout()).unwrap();
//! ```

#![deny(missing_docs)]
pub mod config;
pub mod error;
pub mod mac;
pub mod neighbors;
pub mod self_test;
pub mod vendor;
