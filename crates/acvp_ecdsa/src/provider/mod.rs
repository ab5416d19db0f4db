// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Cryptographic provider capability contract.
//!
//! The executor never performs elliptic curve arithmetic itself. Everything it
//! needs from a backend is described by [`EcdsaProvider`]; each backend ships
//! one adapter implementing it, selected with a Cargo feature:
//!
//! - `use-openssl`: [`OsslEcdsaProvider`]
//! - `use-rustcrypto`: [`RustCryptoEcdsaProvider`]
//!
//! All provider-native values are owned Rust values. Backend resources they
//! wrap are released when the value is dropped, on every exit path.

use super::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "use-openssl")] {
        mod provider_ossl;
        pub use provider_ossl::OsslEcdsaProvider;
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "use-rustcrypto")] {
        mod provider_rustcrypto;
        pub use provider_rustcrypto::RustCryptoEcdsaProvider;
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "use-openssl")] {
        /// Provider used when the caller does not pick one.
        pub type DefaultProvider = OsslEcdsaProvider;
    } else if #[cfg(feature = "use-rustcrypto")] {
        /// Provider used when the caller does not pick one.
        pub type DefaultProvider = RustCryptoEcdsaProvider;
    }
}

/// Capabilities a cryptographic backend must offer to run ECDSA test cases.
///
/// # Validity versus failure
///
/// Methods that check cryptographic validity report an invalid input through
/// their `Ok` value (`None` or `false`). An `Err` means the operation could
/// not be carried out at all.
pub trait EcdsaProvider {
    /// Resolved curve domain parameters.
    type Curve;

    /// Resolved message digest selector.
    type Digest;

    /// Unsigned big integer.
    type Integer;

    /// Private scalar together with its public point.
    type KeyPair;

    /// Validated public point.
    type PublicKey;

    /// ECDSA signature holding the (r, s) pair.
    type Signature;

    /// Looks up the domain parameters of `curve`.
    ///
    /// Returns `None` if the backend does not support the curve.
    fn curve(&self, curve: AcvpCurve) -> Option<Self::Curve>;

    /// Looks up the digest for `hash_alg`.
    ///
    /// Returns `None` if the backend does not support the hash algorithm.
    fn digest(&self, hash_alg: AcvpHashAlg) -> Option<Self::Digest>;

    /// Generates a fresh key pair on `curve`.
    fn generate_key_pair(&self, curve: &Self::Curve) -> Result<Self::KeyPair, AcvpError>;

    /// Returns the private scalar of `key`.
    fn private_scalar(&self, key: &Self::KeyPair) -> Result<Self::Integer, AcvpError>;

    /// Returns the public half of `key`.
    fn public_key(&self, key: &Self::KeyPair) -> Result<Self::PublicKey, AcvpError>;

    /// Builds a public key from affine coordinates and checks its validity.
    ///
    /// Returns `Ok(None)` if the point is not a valid public key on `curve`
    /// (off the curve, point at infinity, coordinates out of range, wrong order).
    fn public_key_from_coordinates(
        &self,
        curve: &Self::Curve,
        x: &Self::Integer,
        y: &Self::Integer,
    ) -> Result<Option<Self::PublicKey>, AcvpError>;

    /// Returns the affine coordinates of `key`.
    fn affine_coordinates(
        &self,
        key: &Self::PublicKey,
    ) -> Result<(Self::Integer, Self::Integer), AcvpError>;

    /// Parses an unsigned big-endian byte string.
    fn integer_from_bytes(&self, bytes: &[u8]) -> Result<Self::Integer, AcvpError>;

    /// Serializes an integer as a minimal-length unsigned big-endian byte string.
    fn integer_to_bytes(&self, value: &Self::Integer) -> Vec<u8>;

    /// Hashes `message` with `digest` and signs the result with `key`.
    fn sign(
        &self,
        key: &Self::KeyPair,
        digest: &Self::Digest,
        message: &[u8],
    ) -> Result<Self::Signature, AcvpError>;

    /// Hashes `message` with `digest` and verifies `signature` with `key`.
    ///
    /// Returns `Ok(false)` for every signature the backend rejects, including
    /// components outside `[1, n - 1]`.
    ///
    /// Backends whose verify call reports rejection and internal failure
    /// through the same error channel cannot tell the two apart. The OpenSSL
    /// adapter is one of them and reports both as `Ok(false)`; only a
    /// failure to hash the message is an `Err` there.
    fn verify(
        &self,
        key: &Self::PublicKey,
        digest: &Self::Digest,
        message: &[u8],
        signature: &Self::Signature,
    ) -> Result<bool, AcvpError>;

    /// Assembles a signature from its components.
    fn signature_from_components(
        &self,
        r: Self::Integer,
        s: Self::Integer,
    ) -> Result<Self::Signature, AcvpError>;

    /// Splits a signature into its components.
    fn signature_components(
        &self,
        signature: &Self::Signature,
    ) -> Result<(Self::Integer, Self::Integer), AcvpError>;
}
