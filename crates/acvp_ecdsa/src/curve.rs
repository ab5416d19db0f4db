// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! ACVP elliptic curve identifiers.

use strum::Display;
use strum::EnumIter;
use strum::EnumString;

/// Elliptic curve as named by the ACVP ECDSA test vectors.
///
/// The string forms (`"P-256"`, `"K-233"`, ...) match the protocol names, so
/// the vector parser can map JSON values with [`str::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum AcvpCurve {
    /// NIST P-192.
    #[strum(serialize = "P-192")]
    P192,

    /// NIST P-224.
    #[strum(serialize = "P-224")]
    P224,

    /// NIST P-256.
    #[strum(serialize = "P-256")]
    P256,

    /// NIST P-384.
    #[strum(serialize = "P-384")]
    P384,

    /// NIST P-521.
    #[strum(serialize = "P-521")]
    P521,

    /// NIST K-163 (Koblitz).
    #[strum(serialize = "K-163")]
    K163,

    /// NIST K-233 (Koblitz).
    #[strum(serialize = "K-233")]
    K233,

    /// NIST K-283 (Koblitz).
    #[strum(serialize = "K-283")]
    K283,

    /// NIST K-409 (Koblitz).
    #[strum(serialize = "K-409")]
    K409,

    /// NIST K-571 (Koblitz).
    #[strum(serialize = "K-571")]
    K571,

    /// NIST B-163 (pseudo-random binary).
    #[strum(serialize = "B-163")]
    B163,

    /// NIST B-233 (pseudo-random binary).
    #[strum(serialize = "B-233")]
    B233,

    /// NIST B-283 (pseudo-random binary).
    #[strum(serialize = "B-283")]
    B283,

    /// NIST B-409 (pseudo-random binary).
    #[strum(serialize = "B-409")]
    B409,

    /// NIST B-571 (pseudo-random binary).
    #[strum(serialize = "B-571")]
    B571,
}
