//! Verification core.
//!
//! Given caller inputs `a` and `c`, the probe renders `a + SecretOffset + c`
//! in decimal, checksums it through the registry and compares against the
//! build's `ExpectedHashBias`. A fresh witness is drawn on every call and
//! enters both sides of the comparison.
//!
//! Only two outcomes leave this module. Wrong inputs, a foreign build, an
//! unresolved checksum routine and a routine that panics all look the same to
//! the caller.

use core::hint::black_box;

use rand::Rng;
use tracing::trace;

use crate::probe::build_params::BuildParams;
use crate::probe::checksum::ChecksumRegistry;
use crate::probe::error::ProbeError;
use crate::probe::witness::Witness;

/// Evidence returned by a passing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    token: i64,
    witness: Witness,
    derived: i32,
}

impl Proof {
    /// Combined checksum of the rendered sum and the witness.
    pub fn token(&self) -> i64 {
        self.token
    }

    pub fn witness(&self) -> &Witness {
        &self.witness
    }

    /// `a + SecretOffset`, for the caller to cross-check.
    pub fn derived(&self) -> i32 {
        self.derived
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed(Proof),
    Failed,
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed(_))
    }

    pub fn proof(&self) -> Option<&Proof> {
        match self {
            CheckOutcome::Passed(proof) => Some(proof),
            CheckOutcome::Failed => None,
        }
    }

    pub fn into_proof(self) -> Option<Proof> {
        match self {
            CheckOutcome::Passed(proof) => Some(proof),
            CheckOutcome::Failed => None,
        }
    }
}

/// Run the probe once. Never panics, never reports why a check failed.
pub fn evaluate<R: Rng + ?Sized>(
    params: &BuildParams,
    registry: &ChecksumRegistry,
    a: i32,
    c: i32,
    rng: &mut R,
) -> CheckOutcome {
    let outcome = match compare(params, registry, a, c, rng) {
        Ok(proof) => CheckOutcome::Passed(proof),
        Err(_) => CheckOutcome::Failed,
    };
    trace!(passed = outcome.is_passed(), "lift probe evaluated");
    outcome
}

#[inline(never)]
fn compare<R: Rng + ?Sized>(
    params: &BuildParams,
    registry: &ChecksumRegistry,
    a: i32,
    c: i32,
    rng: &mut R,
) -> Result<Proof, ProbeError> {
    let witness = Witness::generate(rng);
    let rendered = a
        .wrapping_add(params.secret_offset())
        .wrapping_add(c)
        .to_string();

    let symbol = params.checksum_symbol();
    let witness_hash = i64::from(registry.invoke(symbol, witness.as_str())?);
    let sum_hash = i64::from(registry.invoke(symbol, &rendered)?);

    // The witness term cancels algebraically. Both sides stay as written.
    let lhs = black_box(i64::from(params.expected_hash_bias()) + witness_hash);
    let rhs = black_box(sum_hash + witness_hash);
    if lhs != rhs {
        return Err(ProbeError::ChecksumMismatch);
    }

    Ok(Proof {
        token: sum_hash + witness_hash,
        witness,
        derived: a.wrapping_add(params.secret_offset()),
    })
}
