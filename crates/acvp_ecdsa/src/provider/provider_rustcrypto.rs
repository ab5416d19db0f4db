// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Pure Rust ECDSA provider built on the RustCrypto curve crates.
//!
//! Only P-256 and P-384 are available; every other curve resolves to
//! `None`. Signatures are produced over a prehash computed with the
//! RustCrypto digest crates, so the hash algorithm may differ from the
//! curve's native one. A digest shorter than the field is left-padded to the
//! field size before signing or verifying, which keeps its integer value.

use rand::rngs::OsRng;
use sha1::Sha1;
use sha2::Digest as _;
use sha2::Sha224;
use sha2::Sha256;
use sha2::Sha384;
use sha2::Sha512;
use sha2::Sha512_224;
use sha2::Sha512_256;
use sha3::Sha3_224;
use sha3::Sha3_256;
use sha3::Sha3_384;
use sha3::Sha3_512;

use super::*;

/// ECDSA provider backed by the `p256` and `p384` crates.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoEcdsaProvider;

/// Curve supported by [`RustCryptoEcdsaProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RustCryptoCurve {
    P256,
    P384,
}

/// Signing key of a [`RustCryptoEcdsaProvider`] curve.
#[derive(Clone)]
pub enum RustCryptoKeyPair {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
}

/// Verifying key of a [`RustCryptoEcdsaProvider`] curve.
#[derive(Clone)]
pub enum RustCryptoPublicKey {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
}

/// Signature components as minimal big-endian integers.
///
/// Range checks happen at verification time, so out-of-range components
/// can still be carried into [`EcdsaProvider::verify`] and rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustCryptoSignature {
    r: Vec<u8>,
    s: Vec<u8>,
}

/// Generates the per-curve glue between the provider and one RustCrypto
/// curve crate.
macro_rules! curve_ops {
    ($ops:ident, $krate:ident) => {
        mod $ops {
            use $krate::ecdsa::signature::hazmat::PrehashSigner;
            use $krate::ecdsa::signature::hazmat::PrehashVerifier;
            use $krate::ecdsa::Signature;
            use $krate::ecdsa::SigningKey;
            use $krate::ecdsa::VerifyingKey;
            use $krate::EncodedPoint;
            use $krate::FieldBytes;

            use super::*;

            /// Left-pads a minimal integer to the field size.
            fn field_bytes(value: &[u8]) -> Option<FieldBytes> {
                let mut out = FieldBytes::default();
                let len = out.len();
                if value.len() > len {
                    return None;
                }
                out[len - value.len()..].copy_from_slice(value);
                Some(out)
            }

            pub(super) fn generate() -> SigningKey {
                SigningKey::random(&mut OsRng)
            }

            pub(super) fn private_scalar(key: &SigningKey) -> Vec<u8> {
                trim_leading_zeros(&key.to_bytes())
            }

            pub(super) fn public_key(key: &SigningKey) -> VerifyingKey {
                VerifyingKey::from(key)
            }

            pub(super) fn coordinates(key: &VerifyingKey) -> Result<(Vec<u8>, Vec<u8>), AcvpError> {
                let point = key.to_encoded_point(false);
                match (point.x(), point.y()) {
                    (Some(x), Some(y)) => Ok((trim_leading_zeros(x), trim_leading_zeros(y))),
                    _ => {
                        tracing::error!("public key has no affine coordinates");
                        Err(AcvpError::ProviderFailure("coordinate export failed"))
                    }
                }
            }

            pub(super) fn from_coordinates(x: &[u8], y: &[u8]) -> Option<VerifyingKey> {
                let x = field_bytes(x)?;
                let y = field_bytes(y)?;
                let point = EncodedPoint::from_affine_coordinates(&x, &y, false);
                match VerifyingKey::from_encoded_point(&point) {
                    Ok(key) => Some(key),
                    Err(signature_error) => {
                        tracing::debug!(?signature_error, "public point rejected");
                        None
                    }
                }
            }

            pub(super) fn sign(
                key: &SigningKey,
                prehash: &[u8],
            ) -> Result<RustCryptoSignature, AcvpError> {
                // Short digests are widened here; longer ones are truncated
                // by the signer.
                let padded = field_bytes(prehash);
                let prehash = padded.as_deref().unwrap_or(prehash);
                let signature: Signature =
                    key.sign_prehash(prehash).map_err(|signature_error| {
                        tracing::error!(?signature_error);
                        AcvpError::ProviderFailure("signing failed")
                    })?;
                let (r, s) = signature.split_bytes();

                Ok(RustCryptoSignature {
                    r: trim_leading_zeros(&r),
                    s: trim_leading_zeros(&s),
                })
            }

            pub(super) fn verify(
                key: &VerifyingKey,
                prehash: &[u8],
                signature: &RustCryptoSignature,
            ) -> bool {
                let (Some(r), Some(s)) = (field_bytes(&signature.r), field_bytes(&signature.s))
                else {
                    tracing::debug!("signature component wider than the field");
                    return false;
                };
                let signature = match Signature::from_scalars(r, s) {
                    Ok(signature) => signature,
                    Err(signature_error) => {
                        tracing::debug!(?signature_error, "signature component out of range");
                        return false;
                    }
                };

                let padded = field_bytes(prehash);
                let prehash = padded.as_deref().unwrap_or(prehash);
                match key.verify_prehash(prehash, &signature) {
                    Ok(()) => true,
                    Err(signature_error) => {
                        tracing::debug!(?signature_error, "signature rejected");
                        false
                    }
                }
            }
        }
    };
}

curve_ops!(p256_ops, p256);
curve_ops!(p384_ops, p384);

fn trim_leading_zeros(bytes: &[u8]) -> Vec<u8> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

fn prehash(hash_alg: AcvpHashAlg, message: &[u8]) -> Vec<u8> {
    match hash_alg {
        AcvpHashAlg::Sha1 => Sha1::digest(message).to_vec(),
        AcvpHashAlg::Sha224 => Sha224::digest(message).to_vec(),
        AcvpHashAlg::Sha256 => Sha256::digest(message).to_vec(),
        AcvpHashAlg::Sha384 => Sha384::digest(message).to_vec(),
        AcvpHashAlg::Sha512 => Sha512::digest(message).to_vec(),
        AcvpHashAlg::Sha512_224 => Sha512_224::digest(message).to_vec(),
        AcvpHashAlg::Sha512_256 => Sha512_256::digest(message).to_vec(),
        AcvpHashAlg::Sha3_224 => Sha3_224::digest(message).to_vec(),
        AcvpHashAlg::Sha3_256 => Sha3_256::digest(message).to_vec(),
        AcvpHashAlg::Sha3_384 => Sha3_384::digest(message).to_vec(),
        AcvpHashAlg::Sha3_512 => Sha3_512::digest(message).to_vec(),
    }
}

impl EcdsaProvider for RustCryptoEcdsaProvider {
    type Curve = RustCryptoCurve;
    type Digest = AcvpHashAlg;
    type Integer = Vec<u8>;
    type KeyPair = RustCryptoKeyPair;
    type PublicKey = RustCryptoPublicKey;
    type Signature = RustCryptoSignature;

    fn curve(&self, curve: AcvpCurve) -> Option<RustCryptoCurve> {
        match curve {
            AcvpCurve::P256 => Some(RustCryptoCurve::P256),
            AcvpCurve::P384 => Some(RustCryptoCurve::P384),
            _ => None,
        }
    }

    fn digest(&self, hash_alg: AcvpHashAlg) -> Option<AcvpHashAlg> {
        Some(hash_alg)
    }

    fn generate_key_pair(&self, curve: &RustCryptoCurve) -> Result<RustCryptoKeyPair, AcvpError> {
        Ok(match curve {
            RustCryptoCurve::P256 => RustCryptoKeyPair::P256(p256_ops::generate()),
            RustCryptoCurve::P384 => RustCryptoKeyPair::P384(p384_ops::generate()),
        })
    }

    fn private_scalar(&self, key: &RustCryptoKeyPair) -> Result<Vec<u8>, AcvpError> {
        Ok(match key {
            RustCryptoKeyPair::P256(key) => p256_ops::private_scalar(key),
            RustCryptoKeyPair::P384(key) => p384_ops::private_scalar(key),
        })
    }

    fn public_key(&self, key: &RustCryptoKeyPair) -> Result<RustCryptoPublicKey, AcvpError> {
        Ok(match key {
            RustCryptoKeyPair::P256(key) => RustCryptoPublicKey::P256(p256_ops::public_key(key)),
            RustCryptoKeyPair::P384(key) => RustCryptoPublicKey::P384(p384_ops::public_key(key)),
        })
    }

    fn public_key_from_coordinates(
        &self,
        curve: &RustCryptoCurve,
        x: &Vec<u8>,
        y: &Vec<u8>,
    ) -> Result<Option<RustCryptoPublicKey>, AcvpError> {
        Ok(match curve {
            RustCryptoCurve::P256 => {
                p256_ops::from_coordinates(x, y).map(RustCryptoPublicKey::P256)
            }
            RustCryptoCurve::P384 => {
                p384_ops::from_coordinates(x, y).map(RustCryptoPublicKey::P384)
            }
        })
    }

    fn affine_coordinates(
        &self,
        key: &RustCryptoPublicKey,
    ) -> Result<(Vec<u8>, Vec<u8>), AcvpError> {
        match key {
            RustCryptoPublicKey::P256(key) => p256_ops::coordinates(key),
            RustCryptoPublicKey::P384(key) => p384_ops::coordinates(key),
        }
    }

    fn integer_from_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, AcvpError> {
        Ok(trim_leading_zeros(bytes))
    }

    fn integer_to_bytes(&self, value: &Vec<u8>) -> Vec<u8> {
        value.clone()
    }

    fn sign(
        &self,
        key: &RustCryptoKeyPair,
        digest: &AcvpHashAlg,
        message: &[u8],
    ) -> Result<RustCryptoSignature, AcvpError> {
        let prehash = prehash(*digest, message);
        match key {
            RustCryptoKeyPair::P256(key) => p256_ops::sign(key, &prehash),
            RustCryptoKeyPair::P384(key) => p384_ops::sign(key, &prehash),
        }
    }

    fn verify(
        &self,
        key: &RustCryptoPublicKey,
        digest: &AcvpHashAlg,
        message: &[u8],
        signature: &RustCryptoSignature,
    ) -> Result<bool, AcvpError> {
        let prehash = prehash(*digest, message);
        Ok(match key {
            RustCryptoPublicKey::P256(key) => p256_ops::verify(key, &prehash, signature),
            RustCryptoPublicKey::P384(key) => p384_ops::verify(key, &prehash, signature),
        })
    }

    fn signature_from_components(
        &self,
        r: Vec<u8>,
        s: Vec<u8>,
    ) -> Result<RustCryptoSignature, AcvpError> {
        Ok(RustCryptoSignature { r, s })
    }

    fn signature_components(
        &self,
        signature: &RustCryptoSignature,
    ) -> Result<(Vec<u8>, Vec<u8>), AcvpError> {
        Ok((signature.r.clone(), signature.s.clone()))
    }
}
