// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for the ECDSA test case executor.
mod cache;

use strum::IntoEnumIterator;

use super::*;

/// NIST P-256 base point.
pub(crate) const P256_GX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
pub(crate) const P256_GY: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

/// NIST P-384 base point.
pub(crate) const P384_GX: &str = "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7";
pub(crate) const P384_GY: &str = "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f";

/// RFC 6979 A.2.5, P-256 with SHA-256, message "sample".
pub(crate) const RFC6979_P256_UX: &str =
    "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6";
pub(crate) const RFC6979_P256_UY: &str =
    "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";
pub(crate) const RFC6979_P256_SHA256_R: &str =
    "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716";
pub(crate) const RFC6979_P256_SHA256_S: &str =
    "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8";

pub(crate) fn unhex(value: &str) -> Vec<u8> {
    hex::decode(value).expect("Failed to decode hex test vector")
}

pub(crate) fn provider() -> DefaultProvider {
    DefaultProvider::default()
}

/// Curves the enabled provider can resolve.
pub(crate) fn supported_curves(provider: &DefaultProvider) -> Vec<AcvpCurve> {
    AcvpCurve::iter()
        .filter(|curve| provider.curve(*curve).is_some())
        .collect()
}

/// Hash algorithms the enabled provider can resolve.
pub(crate) fn supported_hashes(provider: &DefaultProvider) -> Vec<AcvpHashAlg> {
    AcvpHashAlg::iter()
        .filter(|hash_alg| provider.digest(*hash_alg).is_some())
        .collect()
}

/// Field size of `curve` in bits.
pub(crate) fn curve_bits(curve: AcvpCurve) -> usize {
    match curve {
        AcvpCurve::P192 => 192,
        AcvpCurve::P224 => 224,
        AcvpCurve::P256 => 256,
        AcvpCurve::P384 => 384,
        AcvpCurve::P521 => 521,
        AcvpCurve::K163 | AcvpCurve::B163 => 163,
        AcvpCurve::K233 | AcvpCurve::B233 => 233,
        AcvpCurve::K283 | AcvpCurve::B283 => 283,
        AcvpCurve::K409 | AcvpCurve::B409 => 409,
        AcvpCurve::K571 | AcvpCurve::B571 => 571,
    }
}

#[cfg(feature = "use-openssl")]
pub(crate) fn is_prime_curve(curve: &AcvpCurve) -> bool {
    matches!(
        curve,
        AcvpCurve::P192 | AcvpCurve::P224 | AcvpCurve::P256 | AcvpCurve::P384 | AcvpCurve::P521
    )
}

/// Digest length of `hash_alg` in bytes.
#[cfg(feature = "use-openssl")]
pub(crate) fn digest_len(hash_alg: AcvpHashAlg) -> usize {
    match hash_alg {
        AcvpHashAlg::Sha1 => 20,
        AcvpHashAlg::Sha224 | AcvpHashAlg::Sha512_224 | AcvpHashAlg::Sha3_224 => 28,
        AcvpHashAlg::Sha256 | AcvpHashAlg::Sha512_256 | AcvpHashAlg::Sha3_256 => 32,
        AcvpHashAlg::Sha384 | AcvpHashAlg::Sha3_384 => 48,
        AcvpHashAlg::Sha512 | AcvpHashAlg::Sha3_512 => 64,
    }
}

pub(crate) fn flip_last_byte(bytes: &mut [u8]) {
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
}

/// Runs a SIGGEN case and returns it with its outputs filled in.
pub(crate) fn sig_gen(
    provider: &DefaultProvider,
    cache: &mut GroupKeyCache<DefaultProvider>,
    tg_id: u32,
    curve: AcvpCurve,
    hash_alg: AcvpHashAlg,
    message: &[u8],
) -> EcdsaTestCase {
    let mut tc = EcdsaTestCase::new(EcdsaMode::SigGen, tg_id, 1, curve)
        .with_hash(hash_alg)
        .with_message(message);
    EcdsaDispatcher::new(provider)
        .run(&mut tc, cache)
        .expect("SIGGEN failed");
    tc
}

/// Builds the SIGVER case that checks the output of a SIGGEN case.
pub(crate) fn sig_ver_of(sig_gen: &EcdsaTestCase) -> EcdsaTestCase {
    let mut tc = EcdsaTestCase::new(EcdsaMode::SigVer, sig_gen.tg_id, 2, sig_gen.curve)
        .with_message(&sig_gen.message)
        .with_public_point(&sig_gen.qx, &sig_gen.qy)
        .with_signature(&sig_gen.r, &sig_gen.s);
    tc.hash_alg = sig_gen.hash_alg;
    tc
}

/// Runs a KEYVER or SIGVER case and returns its disposition.
pub(crate) fn run_verdict(provider: &DefaultProvider, mut tc: EcdsaTestCase) -> Disposition {
    let mut cache = GroupKeyCache::new();
    EcdsaDispatcher::new(provider)
        .run(&mut tc, &mut cache)
        .expect("verification case failed to execute");
    tc.disposition
}
