// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use test_log::test;

use super::*;

fn public_point(update: CacheUpdate<'_, DefaultProvider>) -> (bool, Vec<u8>, Vec<u8>) {
    let key = update.key();
    (update.is_hit(), key.qx().to_vec(), key.qy().to_vec())
}

#[test]
fn test_cache_starts_empty() {
    let cache = GroupKeyCache::<DefaultProvider>::new();
    assert!(cache.current().is_none());
    assert_eq!(cache.tg_id(), None);
}

#[test]
fn test_cache_hit_and_miss() {
    let provider = provider();
    let curve = resolve_curve(&provider, AcvpCurve::P256).expect("P-256 must be supported");
    let mut cache = GroupKeyCache::new();

    let (hit, qx1, qy1) =
        public_point(cache.update(&provider, 3, &curve).expect("Failed to update cache"));
    assert!(!hit);

    let (hit, qx2, qy2) =
        public_point(cache.update(&provider, 3, &curve).expect("Failed to update cache"));
    assert!(hit);
    assert_eq!((&qx1, &qy1), (&qx2, &qy2));

    let (hit, qx3, qy3) =
        public_point(cache.update(&provider, 4, &curve).expect("Failed to update cache"));
    assert!(!hit);
    assert_ne!((&qx1, &qy1), (&qx3, &qy3));
    assert_eq!(cache.tg_id(), Some(4));
}

#[test]
fn test_cache_group_zero() {
    let provider = provider();
    let curve = resolve_curve(&provider, AcvpCurve::P256).expect("P-256 must be supported");
    let mut cache = GroupKeyCache::new();

    let update = cache.update(&provider, 0, &curve).expect("Failed to update cache");
    assert!(matches!(update, CacheUpdate::Miss(_)));
    assert_eq!(update.key().tg_id(), 0);

    let update = cache.update(&provider, 0, &curve).expect("Failed to update cache");
    assert!(matches!(update, CacheUpdate::Hit(_)));
}

#[test]
fn test_cache_key_matches_point() {
    let provider = provider();
    let curve = resolve_curve(&provider, AcvpCurve::P256).expect("P-256 must be supported");
    let mut cache = GroupKeyCache::new();

    let key = cache
        .update(&provider, 1, &curve)
        .expect("Failed to update cache")
        .key();
    let public_key = provider
        .public_key(key.key_pair())
        .expect("Failed to derive public key");
    let (qx, qy) = encode_point(&provider, &public_key).expect("Failed to encode point");

    assert_eq!(qx, key.qx());
    assert_eq!(qy, key.qy());
}

#[test]
fn test_cache_clear() {
    let provider = provider();
    let curve = resolve_curve(&provider, AcvpCurve::P256).expect("P-256 must be supported");
    let mut cache = GroupKeyCache::new();

    let (_, qx1, _) = public_point(cache.update(&provider, 1, &curve).expect("Failed to update cache"));
    cache.clear();
    assert!(cache.current().is_none());
    assert_eq!(cache.tg_id(), None);

    let (hit, qx2, _) =
        public_point(cache.update(&provider, 1, &curve).expect("Failed to update cache"));
    assert!(!hit);
    assert_ne!(qx1, qx2);
}
