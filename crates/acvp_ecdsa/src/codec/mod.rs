// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Conversion between test case byte strings and provider-native values.
//!
//! Byte strings are unsigned big-endian integers. Outputs keep the
//! minimal length the provider produces; callers needing a fixed width pad
//! them themselves.

mod key;
mod signature;

pub use key::*;
pub use signature::*;

use super::*;
