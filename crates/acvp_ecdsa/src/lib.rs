// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! ECDSA test-case executor for the ACVP conformance client.
//!
//! This crate runs the four ECDSA test modes defined by the Automated
//! Cryptographic Validation Protocol against a cryptographic provider and
//! writes the computed values back onto the test case:
//!
//! - **KEYGEN**: generate a key pair and report `d`, `qx`, `qy`
//! - **KEYVER**: validate a public point and report PASS/FAIL
//! - **SIGGEN**: sign a message with a per-test-group key and report `r`, `s`, `qx`, `qy`
//! - **SIGVER**: verify a signature and report PASS/FAIL
//!
//! # Architecture
//!
//! - [`EcdsaProvider`]: capability contract for the cryptographic backend
//! - [`resolve_curve`] / [`resolve_hash`]: protocol identifier to provider identifier mapping
//! - [`decode_point`], [`encode_point`], [`decode_scalar`], [`encode_scalar`]: key material codec
//! - [`decode_signature`], [`encode_signature`]: signature codec
//! - [`GroupKeyCache`]: SIGGEN key pair shared by consecutive cases of one test group
//! - [`EcdsaDispatcher`]: mode selection and execution
//!
//! # Backends
//!
//! - `use-openssl` (default): [`OsslEcdsaProvider`]
//! - `use-rustcrypto`: [`RustCryptoEcdsaProvider`] (P-256 and P-384 only)
//!
//! A cryptographically invalid key or signature is never an error. It is
//! reported through [`Disposition::Fail`]; [`AcvpError`] is reserved for test
//! cases that could not be executed at all.

mod cache;
mod codec;
mod curve;
mod dispatcher;
mod hash;
mod provider;
mod resolver;
mod test_case;

pub use cache::*;
pub use codec::*;
pub use curve::*;
pub use dispatcher::*;
pub use hash::*;
pub use provider::*;
pub use resolver::*;
pub use test_case::*;
use thiserror::Error;

/// Error raised when a test case cannot be executed.
///
/// Every error is scoped to the single test case being processed. The caller
/// decides whether the batch continues.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AcvpError {
    /// The provider has no parameters for the requested curve.
    #[error("unsupported curve {0}")]
    UnsupportedCurve(AcvpCurve),

    /// The provider has no digest for the requested hash algorithm.
    #[error("unsupported hash algorithm {0}")]
    UnsupportedHash(AcvpHashAlg),

    /// A signature mode test case did not name a hash algorithm.
    #[error("test case has no hash algorithm")]
    MissingHashAlgorithm,

    /// Byte input is absent or cannot be parsed by the provider.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(&'static str),

    /// The provider failed for a reason unrelated to input validity.
    #[error("provider failure: {0}")]
    ProviderFailure(&'static str),
}

/// Coarse classification of [`AcvpError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcvpErrorKind {
    /// Unsupported or missing curve/hash identifier.
    Configuration,

    /// Malformed byte input.
    Encoding,

    /// Backend operation failure.
    Provider,
}

impl AcvpError {
    /// Returns the taxonomy class of this error.
    pub fn kind(&self) -> AcvpErrorKind {
        match self {
            AcvpError::UnsupportedCurve(_)
            | AcvpError::UnsupportedHash(_)
            | AcvpError::MissingHashAlgorithm => AcvpErrorKind::Configuration,
            AcvpError::InvalidEncoding(_) => AcvpErrorKind::Encoding,
            AcvpError::ProviderFailure(_) => AcvpErrorKind::Provider,
        }
    }
}

#[cfg(all(test, any(feature = "use-openssl", feature = "use-rustcrypto")))]
mod tests;
