// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;

/// Decodes affine coordinates into a validated public key on `curve`.
///
/// Returns `Ok(None)` when the coordinates parse but do not describe a valid
/// public key on `curve`.
///
/// # Errors
///
/// [`AcvpError::InvalidEncoding`] if either coordinate is empty or cannot be
/// parsed by the provider.
pub fn decode_point<P: EcdsaProvider>(
    provider: &P,
    qx: &[u8],
    qy: &[u8],
    curve: &P::Curve,
) -> Result<Option<P::PublicKey>, AcvpError> {
    if qx.is_empty() {
        tracing::error!("public point has no x coordinate");
        return Err(AcvpError::InvalidEncoding("empty qx"));
    }
    if qy.is_empty() {
        tracing::error!("public point has no y coordinate");
        return Err(AcvpError::InvalidEncoding("empty qy"));
    }

    let x = provider.integer_from_bytes(qx)?;
    let y = provider.integer_from_bytes(qy)?;

    provider.public_key_from_coordinates(curve, &x, &y)
}

/// Encodes the affine coordinates of `key` as `(qx, qy)`.
pub fn encode_point<P: EcdsaProvider>(
    provider: &P,
    key: &P::PublicKey,
) -> Result<(Vec<u8>, Vec<u8>), AcvpError> {
    let (x, y) = provider.affine_coordinates(key)?;
    Ok((provider.integer_to_bytes(&x), provider.integer_to_bytes(&y)))
}

/// Decodes an unsigned big-endian scalar.
///
/// # Errors
///
/// [`AcvpError::InvalidEncoding`] if `bytes` is empty or cannot be parsed.
pub fn decode_scalar<P: EcdsaProvider>(provider: &P, bytes: &[u8]) -> Result<P::Integer, AcvpError> {
    if bytes.is_empty() {
        tracing::error!("scalar is empty");
        return Err(AcvpError::InvalidEncoding("empty scalar"));
    }

    provider.integer_from_bytes(bytes)
}

/// Encodes a scalar as an unsigned big-endian byte string.
pub fn encode_scalar<P: EcdsaProvider>(provider: &P, value: &P::Integer) -> Vec<u8> {
    provider.integer_to_bytes(value)
}
