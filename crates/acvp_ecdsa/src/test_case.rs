// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! ECDSA test case data exchanged with the vector orchestration layer.

use strum::Display;
use strum::EnumIter;
use strum::EnumString;

use super::*;

/// ECDSA test mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum EcdsaMode {
    /// Key pair generation.
    #[strum(serialize = "keyGen")]
    KeyGen,

    /// Public key validation.
    #[strum(serialize = "keyVer")]
    KeyVer,

    /// Signature generation.
    #[strum(serialize = "sigGen")]
    SigGen,

    /// Signature verification.
    #[strum(serialize = "sigVer")]
    SigVer,
}

/// Verdict of a KEYVER or SIGVER test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Disposition {
    /// The key or signature is valid.
    #[strum(serialize = "passed")]
    Pass,

    /// The key or signature is invalid.
    #[default]
    #[strum(serialize = "failed")]
    Fail,
}

impl From<bool> for Disposition {
    fn from(valid: bool) -> Self {
        if valid {
            Disposition::Pass
        } else {
            Disposition::Fail
        }
    }
}

/// A single ECDSA test case.
///
/// Inputs and outputs share the same fields; which ones are read and which
/// ones are written depends on [`EcdsaTestCase::mode`]:
///
/// | Mode   | Reads                                 | Writes              |
/// |--------|---------------------------------------|---------------------|
/// | KeyGen | `curve`                               | `d`, `qx`, `qy`     |
/// | KeyVer | `curve`, `qx`, `qy`                   | `disposition`       |
/// | SigGen | `curve`, `hash_alg`, `tg_id`, `message` | `r`, `s`, `qx`, `qy` |
/// | SigVer | `curve`, `hash_alg`, `message`, `qx`, `qy`, `r`, `s` | `disposition` |
///
/// Byte fields hold unsigned big-endian integers. After a failed execution
/// the output fields must not be relied upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaTestCase {
    /// Test mode.
    pub mode: EcdsaMode,
    /// Test group identifier.
    pub tg_id: u32,
    /// Test case identifier, used for diagnostics.
    pub tc_id: u32,
    /// Curve the case runs on.
    pub curve: AcvpCurve,
    /// Hash algorithm; required for SIGGEN and SIGVER.
    pub hash_alg: Option<AcvpHashAlg>,
    /// Message to sign or verify.
    pub message: Vec<u8>,
    /// Public point x coordinate.
    pub qx: Vec<u8>,
    /// Public point y coordinate.
    pub qy: Vec<u8>,
    /// Private scalar.
    pub d: Vec<u8>,
    /// Signature component r.
    pub r: Vec<u8>,
    /// Signature component s.
    pub s: Vec<u8>,
    /// Verification verdict.
    pub disposition: Disposition,
}

impl EcdsaTestCase {
    /// Creates an empty test case for the given mode, group and curve.
    pub fn new(mode: EcdsaMode, tg_id: u32, tc_id: u32, curve: AcvpCurve) -> Self {
        Self {
            mode,
            tg_id,
            tc_id,
            curve,
            hash_alg: None,
            message: Vec::new(),
            qx: Vec::new(),
            qy: Vec::new(),
            d: Vec::new(),
            r: Vec::new(),
            s: Vec::new(),
            disposition: Disposition::default(),
        }
    }

    /// Sets the hash algorithm.
    pub fn with_hash(mut self, hash_alg: AcvpHashAlg) -> Self {
        self.hash_alg = Some(hash_alg);
        self
    }

    /// Sets the message.
    pub fn with_message(mut self, message: &[u8]) -> Self {
        self.message = message.to_vec();
        self
    }

    /// Sets the public point coordinates.
    pub fn with_public_point(mut self, qx: &[u8], qy: &[u8]) -> Self {
        self.qx = qx.to_vec();
        self.qy = qy.to_vec();
        self
    }

    /// Sets the signature components.
    pub fn with_signature(mut self, r: &[u8], s: &[u8]) -> Self {
        self.r = r.to_vec();
        self.s = s.to_vec();
        self
    }
}
