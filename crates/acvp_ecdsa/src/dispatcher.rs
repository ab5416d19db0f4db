// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! ECDSA test case execution.

use super::*;

/// Runs ECDSA test cases against a provider.
///
/// The dispatcher only borrows the provider. State carried between SIGGEN
/// cases lives in the caller's [`GroupKeyCache`].
pub struct EcdsaDispatcher<'a, P: EcdsaProvider> {
    provider: &'a P,
}

impl<'a, P: EcdsaProvider> EcdsaDispatcher<'a, P> {
    /// Creates a dispatcher using `provider`.
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Executes `tc` and writes its outputs back onto it.
    ///
    /// For KEYVER and SIGVER an invalid key or signature is a successful run
    /// with [`Disposition::Fail`].
    ///
    /// # Errors
    ///
    /// Returns an [`AcvpError`] if the case could not be executed. Output
    /// fields of `tc` are unspecified in that case.
    pub fn run(&self, tc: &mut EcdsaTestCase, cache: &mut GroupKeyCache<P>) -> Result<(), AcvpError> {
        let span = tracing::debug_span!(
            "ecdsa",
            tg_id = tc.tg_id,
            tc_id = tc.tc_id,
            mode = %tc.mode,
            curve = %tc.curve
        );
        let _enter = span.enter();

        let result = self.dispatch(tc, cache);
        if let Err(error) = &result {
            tracing::error!(%error, kind = ?error.kind(), "test case failed");
        }

        result
    }

    fn dispatch(&self, tc: &mut EcdsaTestCase, cache: &mut GroupKeyCache<P>) -> Result<(), AcvpError> {
        let curve = resolve_curve(self.provider, tc.curve)?;

        match tc.mode {
            EcdsaMode::KeyGen => self.key_gen(tc, &curve),
            EcdsaMode::KeyVer => self.key_ver(tc, &curve),
            EcdsaMode::SigGen => {
                let digest = resolve_hash(self.provider, tc.hash_alg)?;
                self.sig_gen(tc, &curve, &digest, cache)
            }
            EcdsaMode::SigVer => {
                let digest = resolve_hash(self.provider, tc.hash_alg)?;
                self.sig_ver(tc, &curve, &digest)
            }
        }
    }

    fn key_gen(&self, tc: &mut EcdsaTestCase, curve: &P::Curve) -> Result<(), AcvpError> {
        let key_pair = self.provider.generate_key_pair(curve)?;
        let d = self.provider.private_scalar(&key_pair)?;
        let public_key = self.provider.public_key(&key_pair)?;
        let (qx, qy) = encode_point(self.provider, &public_key)?;

        tc.d = encode_scalar(self.provider, &d);
        tc.qx = qx;
        tc.qy = qy;

        Ok(())
    }

    fn key_ver(&self, tc: &mut EcdsaTestCase, curve: &P::Curve) -> Result<(), AcvpError> {
        tc.disposition = Disposition::Fail;

        let valid = decode_point(self.provider, &tc.qx, &tc.qy, curve)?.is_some();
        tc.disposition = Disposition::from(valid);

        tracing::debug!(disposition = %tc.disposition);
        Ok(())
    }

    fn sig_gen(
        &self,
        tc: &mut EcdsaTestCase,
        curve: &P::Curve,
        digest: &P::Digest,
        cache: &mut GroupKeyCache<P>,
    ) -> Result<(), AcvpError> {
        let update = cache.update(self.provider, tc.tg_id, curve)?;
        let group_key = update.key();

        let signature = self
            .provider
            .sign(group_key.key_pair(), digest, &tc.message)?;
        let (r, s) = encode_signature(self.provider, &signature)?;

        tc.r = r;
        tc.s = s;
        tc.qx = group_key.qx().to_vec();
        tc.qy = group_key.qy().to_vec();

        Ok(())
    }

    fn sig_ver(
        &self,
        tc: &mut EcdsaTestCase,
        curve: &P::Curve,
        digest: &P::Digest,
    ) -> Result<(), AcvpError> {
        tc.disposition = Disposition::Fail;

        let signature = decode_signature(self.provider, &tc.r, &tc.s)?;
        let Some(public_key) = decode_point(self.provider, &tc.qx, &tc.qy, curve)? else {
            tracing::debug!("public key invalid");
            return Ok(());
        };

        let valid = self
            .provider
            .verify(&public_key, digest, &tc.message, &signature)?;
        tc.disposition = Disposition::from(valid);

        tracing::debug!(disposition = %tc.disposition);
        Ok(())
    }
}
