// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Maps protocol identifiers to provider-native identifiers.

use super::*;

/// Resolves an ACVP curve to the provider's curve parameters.
///
/// # Errors
///
/// [`AcvpError::UnsupportedCurve`] if the provider has no parameters for
/// `curve`.
pub fn resolve_curve<P: EcdsaProvider>(
    provider: &P,
    curve: AcvpCurve,
) -> Result<P::Curve, AcvpError> {
    provider.curve(curve).ok_or_else(|| {
        tracing::error!(%curve, "unsupported curve");
        AcvpError::UnsupportedCurve(curve)
    })
}

/// Resolves an ACVP hash algorithm to the provider's digest.
///
/// # Errors
///
/// - [`AcvpError::MissingHashAlgorithm`] if `hash_alg` is `None`
/// - [`AcvpError::UnsupportedHash`] if the provider has no such digest
pub fn resolve_hash<P: EcdsaProvider>(
    provider: &P,
    hash_alg: Option<AcvpHashAlg>,
) -> Result<P::Digest, AcvpError> {
    let Some(hash_alg) = hash_alg else {
        tracing::error!("test case has no hash algorithm");
        return Err(AcvpError::MissingHashAlgorithm);
    };

    provider.digest(hash_alg).ok_or_else(|| {
        tracing::error!(%hash_alg, "unsupported hash algorithm");
        AcvpError::UnsupportedHash(hash_alg)
    })
}
