// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! ACVP hash algorithm identifiers.

use strum::Display;
use strum::EnumIter;
use strum::EnumString;

/// Hash algorithm as named by the ACVP ECDSA test vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum AcvpHashAlg {
    /// SHA-1
    #[strum(serialize = "SHA-1")]
    Sha1,

    /// SHA2-224
    #[strum(serialize = "SHA2-224")]
    Sha224,

    /// SHA2-256
    #[strum(serialize = "SHA2-256")]
    Sha256,

    /// SHA2-384
    #[strum(serialize = "SHA2-384")]
    Sha384,

    /// SHA2-512
    #[strum(serialize = "SHA2-512")]
    Sha512,

    /// SHA2-512/224
    #[strum(serialize = "SHA2-512/224")]
    Sha512_224,

    /// SHA2-512/256
    #[strum(serialize = "SHA2-512/256")]
    Sha512_256,

    /// SHA3-224
    #[strum(serialize = "SHA3-224")]
    Sha3_224,

    /// SHA3-256
    #[strum(serialize = "SHA3-256")]
    Sha3_256,

    /// SHA3-384
    #[strum(serialize = "SHA3-384")]
    Sha3_384,

    /// SHA3-512
    #[strum(serialize = "SHA3-512")]
    Sha3_512,
}
