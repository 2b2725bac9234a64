// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.

pub mod normalize;

pub use normalize::{char_len, normalize, tokenize};
