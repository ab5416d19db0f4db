// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Per-test-group key pair for SIGGEN.
//!
//! Every SIGGEN case of one test group must be signed with the same key, and
//! the group's public point is reported with each case. Vectors arrive grouped,
//! so a single slot keyed by group id is enough: a new group id evicts the
//! previous key pair and generates the next one.

use super::*;

/// Key pair shared by the SIGGEN cases of one test group.
pub struct GroupKey<P: EcdsaProvider> {
    tg_id: u32,
    key_pair: P::KeyPair,
    qx: Vec<u8>,
    qy: Vec<u8>,
}

impl<P: EcdsaProvider> GroupKey<P> {
    /// Test group the key pair belongs to.
    pub fn tg_id(&self) -> u32 {
        self.tg_id
    }

    pub fn key_pair(&self) -> &P::KeyPair {
        &self.key_pair
    }

    /// Encoded x coordinate of the public point.
    pub fn qx(&self) -> &[u8] {
        &self.qx
    }

    /// Encoded y coordinate of the public point.
    pub fn qy(&self) -> &[u8] {
        &self.qy
    }
}

/// Outcome of [`GroupKeyCache::update`].
pub enum CacheUpdate<'a, P: EcdsaProvider> {
    /// The cached key pair already belonged to the requested group.
    Hit(&'a GroupKey<P>),

    /// A new key pair was generated for the requested group.
    Miss(&'a GroupKey<P>),
}

impl<'a, P: EcdsaProvider> CacheUpdate<'a, P> {
    /// Returns the group key regardless of how it was obtained.
    pub fn key(&self) -> &'a GroupKey<P> {
        match self {
            CacheUpdate::Hit(key) | CacheUpdate::Miss(key) => *key,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, CacheUpdate::Hit(_))
    }
}

/// Single-slot cache holding the SIGGEN key pair of the current test group.
///
/// The cache is owned by the caller and threaded through
/// [`EcdsaDispatcher::run`]. Dropping it or calling [`GroupKeyCache::clear`]
/// releases the cached key pair.
pub struct GroupKeyCache<P: EcdsaProvider> {
    slot: Option<GroupKey<P>>,
}

impl<P: EcdsaProvider> Default for GroupKeyCache<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EcdsaProvider> GroupKeyCache<P> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Returns the key pair for `tg_id`, generating one on `curve` if the
    /// cached pair belongs to another group.
    ///
    /// The previous pair is evicted before generation starts, so a failed
    /// generation leaves the cache empty.
    ///
    /// # Errors
    ///
    /// [`AcvpError::ProviderFailure`] if key generation or public point
    /// export fails.
    pub fn update(
        &mut self,
        provider: &P,
        tg_id: u32,
        curve: &P::Curve,
    ) -> Result<CacheUpdate<'_, P>, AcvpError> {
        if self.tg_id() == Some(tg_id) {
            tracing::debug!(tg_id, "reusing group key");
            return self
                .slot
                .as_ref()
                .map(CacheUpdate::Hit)
                .ok_or(AcvpError::ProviderFailure("group key missing"));
        }

        if let Some(evicted) = self.slot.take() {
            tracing::debug!(evicted = evicted.tg_id, tg_id, "evicting group key");
        }

        let key_pair = provider.generate_key_pair(curve)?;
        let public_key = provider.public_key(&key_pair)?;
        let (qx, qy) = encode_point(provider, &public_key)?;

        tracing::debug!(tg_id, "generated group key");
        let key: &GroupKey<P> = self.slot.insert(GroupKey {
            tg_id,
            key_pair,
            qx,
            qy,
        });

        Ok(CacheUpdate::Miss(key))
    }

    /// Returns the cached key pair, if any.
    pub fn current(&self) -> Option<&GroupKey<P>> {
        self.slot.as_ref()
    }

    /// Returns the group id of the cached key pair, if any.
    pub fn tg_id(&self) -> Option<u32> {
        self.slot.as_ref().map(GroupKey::tg_id)
    }

    /// Releases the cached key pair.
    pub fn clear(&mut self) {
        if let Some(evicted) = self.slot.take() {
            tracing::debug!(tg_id = evicted.tg_id, "released group key");
        }
    }
}
