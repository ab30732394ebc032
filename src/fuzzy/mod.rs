// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via bit-parallel approximate matching.
//!
//! One scorer lives here: a Bitap matcher that grades a pattern against a
//! single piece of text by error count and by how far the match drifted from
//! the expected location. Field weighting and tokenization sit a layer up in
//! `search`.

mod bitap;

pub use bitap::*;
