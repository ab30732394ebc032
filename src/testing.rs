//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::types::{SearchEntry, SearchIndex};

/// Create an entry for a page under `section` named `slug`.
///
/// `make_entry("guides", "getting-started", "...")` has url
/// `/docs/1.1/guides/getting-started.md`.
pub fn make_entry(section: &str, slug: &str, body: &str) -> SearchEntry {
    SearchEntry::new(format!("/docs/1.1/{}/{}.md", section, slug), body)
}

/// Create an index from `(url, body)` pairs.
pub fn make_index(pairs: &[(&str, &str)]) -> SearchIndex {
    pairs
        .iter()
        .map(|(url, body)| SearchEntry::new(*url, *body))
        .collect()
}

/// A small documentation site, in the shape the docs generator emits.
pub fn sample_index() -> SearchIndex {
    SearchIndex::new(vec![
        make_entry(
            "core",
            "getting-started",
            "Install the server, create an access token, and issue your first asset.",
        ),
        make_entry(
            "core",
            "keys",
            "Create signing keys with the HSM or the mock key store. Keys sign transactions.",
        ),
        make_entry(
            "core",
            "accounts",
            "Accounts hold balances of assets. Each account is controlled by one or more keys.",
        ),
        make_entry(
            "core",
            "transactions",
            "Build, sign and submit transactions that issue, transfer and retire assets.",
        ),
        make_entry(
            "core",
            "unspent-outputs",
            "Unspent outputs are the spendable results of past transactions.",
        ),
        make_entry(
            "reference",
            "api-objects",
            "Reference for assets, accounts, transactions and unspent output objects.",
        ),
        make_entry(
            "reference",
            "error-codes",
            "Every error code returned by the API with its message and retry hint.",
        ),
        make_entry(
            "learn-more",
            "blockchain-operators",
            "Block generators and block signers operate the network consensus.",
        ),
    ])
}

/// A corpus with `count` copies of the same body, for limit tests.
pub fn repeated_index(count: usize, body: &str) -> SearchIndex {
    (0..count)
        .map(|i| make_entry("bulk", &format!("page-{}", i), body))
        .collect()
}
