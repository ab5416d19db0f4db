// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(any(feature = "use-openssl", feature = "use-rustcrypto"))]

use azihsm_acvp_ecdsa::*;
use test_log::test;

/// Runs a stream of test cases through one dispatcher and one cache, the way
/// the vector orchestration layer does.
fn run_stream(cases: &mut [EcdsaTestCase]) -> Vec<Result<(), AcvpError>> {
    let provider = DefaultProvider::default();
    let dispatcher = EcdsaDispatcher::new(&provider);
    let mut cache = GroupKeyCache::new();

    let results = cases
        .iter_mut()
        .map(|tc| dispatcher.run(tc, &mut cache))
        .collect();

    cache.clear();
    results
}

#[test]
fn test_p256_sha256_end_to_end() {
    let mut generated = [
        EcdsaTestCase::new(EcdsaMode::KeyGen, 1, 1, AcvpCurve::P256),
        EcdsaTestCase::new(EcdsaMode::SigGen, 2, 2, AcvpCurve::P256)
            .with_hash(AcvpHashAlg::Sha256)
            .with_message(b"abc"),
    ];
    for result in run_stream(&mut generated) {
        assert_eq!(result, Ok(()));
    }
    let [key_gen, sig_gen] = generated;

    let mut verified = [
        EcdsaTestCase::new(EcdsaMode::KeyVer, 3, 3, AcvpCurve::P256)
            .with_public_point(&key_gen.qx, &key_gen.qy),
        EcdsaTestCase::new(EcdsaMode::SigVer, 4, 4, AcvpCurve::P256)
            .with_hash(AcvpHashAlg::Sha256)
            .with_message(b"abc")
            .with_public_point(&sig_gen.qx, &sig_gen.qy)
            .with_signature(&sig_gen.r, &sig_gen.s),
    ];
    for result in run_stream(&mut verified) {
        assert_eq!(result, Ok(()));
    }

    assert_eq!(verified[0].disposition, Disposition::Pass);
    assert_eq!(verified[1].disposition, Disposition::Pass);
}

#[test]
fn test_fault_does_not_stop_stream() {
    let mut cases = [
        EcdsaTestCase::new(EcdsaMode::SigGen, 1, 1, AcvpCurve::P256).with_message(b"abc"),
        EcdsaTestCase::new(EcdsaMode::SigGen, 1, 2, AcvpCurve::P256)
            .with_hash(AcvpHashAlg::Sha256)
            .with_message(b"abc"),
        EcdsaTestCase::new(EcdsaMode::KeyVer, 2, 3, AcvpCurve::P256),
        EcdsaTestCase::new(EcdsaMode::SigGen, 1, 4, AcvpCurve::P256)
            .with_hash(AcvpHashAlg::Sha384)
            .with_message(b"abc"),
    ];

    let results = run_stream(&mut cases);

    assert_eq!(results[0], Err(AcvpError::MissingHashAlgorithm));
    assert_eq!(results[1], Ok(()));
    assert_eq!(
        results[2].clone().map_err(|error| error.kind()),
        Err(AcvpErrorKind::Encoding)
    );
    assert_eq!(results[3], Ok(()));
    assert_eq!(cases[1].qx, cases[3].qx);
    assert_eq!(cases[1].qy, cases[3].qy);
}

#[test]
fn test_groups_get_distinct_keys() {
    let mut cases: Vec<EcdsaTestCase> = (0..3)
        .map(|tg_id| {
            EcdsaTestCase::new(EcdsaMode::SigGen, tg_id, tg_id + 1, AcvpCurve::P256)
                .with_hash(AcvpHashAlg::Sha256)
                .with_message(b"abc")
        })
        .collect();

    for result in run_stream(&mut cases) {
        assert_eq!(result, Ok(()));
    }

    assert_ne!(cases[0].qx, cases[1].qx);
    assert_ne!(cases[1].qx, cases[2].qx);
    assert_ne!(cases[0].qx, cases[2].qx);
}
