//! React-Native-style bridge method: one callback, three string arguments.

use crate::probe::verifier::CheckOutcome;
use crate::probe::Probe;

const FAILURE: &str = "0";

/// Run the probe and hand `(token, witness, derived)` to `callback`, or
/// `("0", "0", "0")` on failure.
pub fn invoke<F>(probe: &Probe, a: i32, c: i32, callback: F)
where
    F: FnOnce(String, String, String),
{
    match probe.check(a, c) {
        CheckOutcome::Passed(proof) => callback(
            proof.token().to_string(),
            proof.witness().to_string(),
            proof.derived().to_string(),
        ),
        CheckOutcome::Failed => callback(FAILURE.into(), FAILURE.into(), FAILURE.into()),
    }
}
