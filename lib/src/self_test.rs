//! Built-in lookup smoke test

use std::io::Write;

use crate::{
    error::Result,
    vendor::{self, LookupResult, VendorLookupClient},
};

/// Fixed sample inputs: a full colon separated address, a truncated prefix and
/// an uppercase hyphenated prefix
pub const SELF_TEST_ADDRESSES: [&str; 3] =
    ["98:06:3c:92:ff:c5", "9c:a5:13", "48-E7-DA"];

/// Resolves each sample address verbatim, printing a banner before each result
/// block. Outcomes are not judged; every block is printed even when its
/// lookup fails.
pub fn run_self_test(
    client: &dyn VendorLookupClient,
    out: &mut dyn Write,
) -> Result<Vec<LookupResult>> {
    let mut results = Vec::with_capacity(SELF_TEST_ADDRESSES.len());

    for address in SELF_TEST_ADDRESSES {
        writeln!(out)?;
        writeln!(out, "Probando la MAC: {}", address)?;
        results.push(vendor::report(client, address, out)?);
    }

    Ok(results)
}

#[cfg(test)]
#[path = "./self_test_tests.rs"]
mod tests;
