// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! OpenSSL-based ECDSA provider.
//!
//! Maps the provider contract onto the `openssl` crate:
//!
//! - curve parameters: [`EcGroup`] looked up by [`Nid`]
//! - key pairs and public keys: [`EcKey`]
//! - integers: [`BigNum`]
//! - signatures: [`EcdsaSig`]
//! - digests: [`MessageDigest`]
//!
//! Prime and binary NIST curves are supported as far as the linked OpenSSL
//! supports them; a library built without binary curve support reports those
//! curves as unsupported.

use openssl::bn::BigNum;
use openssl::bn::BigNumContext;
use openssl::ec::EcGroup;
use openssl::ec::EcKey;
use openssl::ecdsa::EcdsaSig;
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::Private;
use openssl::pkey::Public;

use super::*;

/// ECDSA provider backed by OpenSSL.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsslEcdsaProvider;

impl EcdsaProvider for OsslEcdsaProvider {
    type Curve = EcGroup;
    type Digest = MessageDigest;
    type Integer = BigNum;
    type KeyPair = EcKey<Private>;
    type PublicKey = EcKey<Public>;
    type Signature = EcdsaSig;

    fn curve(&self, curve: AcvpCurve) -> Option<EcGroup> {
        let nid = Nid::from(curve);
        match EcGroup::from_curve_name(nid) {
            Ok(group) => Some(group),
            Err(openssl_error_stack) => {
                tracing::error!(%curve, ?openssl_error_stack, "curve not available");
                None
            }
        }
    }

    fn digest(&self, hash_alg: AcvpHashAlg) -> Option<MessageDigest> {
        match hash_alg {
            AcvpHashAlg::Sha1 => Some(MessageDigest::sha1()),
            AcvpHashAlg::Sha224 => Some(MessageDigest::sha224()),
            AcvpHashAlg::Sha256 => Some(MessageDigest::sha256()),
            AcvpHashAlg::Sha384 => Some(MessageDigest::sha384()),
            AcvpHashAlg::Sha512 => Some(MessageDigest::sha512()),
            AcvpHashAlg::Sha512_224 => MessageDigest::from_name("SHA512-224"),
            AcvpHashAlg::Sha512_256 => MessageDigest::from_name("SHA512-256"),
            AcvpHashAlg::Sha3_224 => Some(MessageDigest::sha3_224()),
            AcvpHashAlg::Sha3_256 => Some(MessageDigest::sha3_256()),
            AcvpHashAlg::Sha3_384 => Some(MessageDigest::sha3_384()),
            AcvpHashAlg::Sha3_512 => Some(MessageDigest::sha3_512()),
        }
    }

    fn generate_key_pair(&self, curve: &EcGroup) -> Result<EcKey<Private>, AcvpError> {
        EcKey::generate(curve).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("key generation failed")
        })
    }

    fn private_scalar(&self, key: &EcKey<Private>) -> Result<BigNum, AcvpError> {
        key.private_key().to_owned().map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("private scalar export failed")
        })
    }

    fn public_key(&self, key: &EcKey<Private>) -> Result<EcKey<Public>, AcvpError> {
        EcKey::from_public_key(key.group(), key.public_key()).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("public key export failed")
        })
    }

    fn public_key_from_coordinates(
        &self,
        curve: &EcGroup,
        x: &BigNum,
        y: &BigNum,
    ) -> Result<Option<EcKey<Public>>, AcvpError> {
        // Setting the coordinates already runs the full key check; any
        // rejection here is a property of the point, not a fault.
        let key = match EcKey::from_public_key_affine_coordinates(curve, x, y) {
            Ok(key) => key,
            Err(openssl_error_stack) => {
                tracing::debug!(?openssl_error_stack, "public point rejected");
                return Ok(None);
            }
        };

        if let Err(openssl_error_stack) = key.check_key() {
            tracing::debug!(?openssl_error_stack, "public key check failed");
            return Ok(None);
        }

        Ok(Some(key))
    }

    fn affine_coordinates(&self, key: &EcKey<Public>) -> Result<(BigNum, BigNum), AcvpError> {
        let mut ctx = BigNumContext::new().map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("bignum context allocation failed")
        })?;
        let mut x = BigNum::new().map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("bignum allocation failed")
        })?;
        let mut y = BigNum::new().map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("bignum allocation failed")
        })?;

        key.public_key()
            .affine_coordinates(key.group(), &mut x, &mut y, &mut ctx)
            .map_err(|openssl_error_stack| {
                tracing::error!(?openssl_error_stack);
                AcvpError::ProviderFailure("coordinate export failed")
            })?;

        Ok((x, y))
    }

    fn integer_from_bytes(&self, bytes: &[u8]) -> Result<BigNum, AcvpError> {
        BigNum::from_slice(bytes).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::InvalidEncoding("integer import failed")
        })
    }

    fn integer_to_bytes(&self, value: &BigNum) -> Vec<u8> {
        value.to_vec()
    }

    fn sign(
        &self,
        key: &EcKey<Private>,
        digest: &MessageDigest,
        message: &[u8],
    ) -> Result<EcdsaSig, AcvpError> {
        let hash = openssl::hash::hash(*digest, message).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("message hashing failed")
        })?;

        EcdsaSig::sign(&hash, key).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("signing failed")
        })
    }

    fn verify(
        &self,
        key: &EcKey<Public>,
        digest: &MessageDigest,
        message: &[u8],
        signature: &EcdsaSig,
    ) -> Result<bool, AcvpError> {
        let hash = openssl::hash::hash(*digest, message).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("message hashing failed")
        })?;

        // OpenSSL reports some malformed signatures (e.g. r >= n) as errors
        // rather than as a mismatch, on the same channel as internal
        // failures. All of them are rejections here.
        match signature.verify(&hash, key) {
            Ok(valid) => Ok(valid),
            Err(openssl_error_stack) => {
                tracing::debug!(?openssl_error_stack, "signature rejected");
                Ok(false)
            }
        }
    }

    fn signature_from_components(&self, r: BigNum, s: BigNum) -> Result<EcdsaSig, AcvpError> {
        EcdsaSig::from_private_components(r, s).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("signature assembly failed")
        })
    }

    fn signature_components(&self, signature: &EcdsaSig) -> Result<(BigNum, BigNum), AcvpError> {
        let r = signature.r().to_owned().map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("signature component export failed")
        })?;
        let s = signature.s().to_owned().map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            AcvpError::ProviderFailure("signature component export failed")
        })?;

        Ok((r, s))
    }
}

/// Converts an ACVP curve to its OpenSSL NID.
impl From<AcvpCurve> for Nid {
    fn from(curve: AcvpCurve) -> Self {
        match curve {
            AcvpCurve::P192 => Nid::X9_62_PRIME192V1,
            AcvpCurve::P224 => Nid::SECP224R1,
            AcvpCurve::P256 => Nid::X9_62_PRIME256V1,
            AcvpCurve::P384 => Nid::SECP384R1,
            AcvpCurve::P521 => Nid::SECP521R1,
            AcvpCurve::K163 => Nid::SECT163K1,
            AcvpCurve::K233 => Nid::SECT233K1,
            AcvpCurve::K283 => Nid::SECT283K1,
            AcvpCurve::K409 => Nid::SECT409K1,
            AcvpCurve::K571 => Nid::SECT571K1,
            AcvpCurve::B163 => Nid::SECT163R2,
            AcvpCurve::B233 => Nid::SECT233R1,
            AcvpCurve::B283 => Nid::SECT283R1,
            AcvpCurve::B409 => Nid::SECT409R1,
            AcvpCurve::B571 => Nid::SECT571R1,
        }
    }
}
