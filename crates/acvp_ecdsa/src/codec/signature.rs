// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;

/// Builds a provider signature from its `r` and `s` components.
///
/// # Errors
///
/// [`AcvpError::InvalidEncoding`] if `r` or `s` is empty or unparseable.
pub fn decode_signature<P: EcdsaProvider>(
    provider: &P,
    r: &[u8],
    s: &[u8],
) -> Result<P::Signature, AcvpError> {
    let r = decode_scalar(provider, r)?;
    let s = decode_scalar(provider, s)?;

    provider.signature_from_components(r, s)
}

/// Splits a provider signature into `(r, s)` byte strings.
pub fn encode_signature<P: EcdsaProvider>(
    provider: &P,
    signature: &P::Signature,
) -> Result<(Vec<u8>, Vec<u8>), AcvpError> {
    let (r, s) = provider.signature_components(signature)?;
    Ok((encode_scalar(provider, &r), encode_scalar(provider, &s)))
}
