//! NativeScript-style class method: result returned as a single string.

use crate::probe::adapters::join_proof;
use crate::probe::verifier::CheckOutcome;
use crate::probe::Probe;

pub const FAILURE: &str = "0,0,0";

/// `"token,witness,derived"` on success, [`FAILURE`] otherwise.
pub fn call(probe: &Probe, a: i32, c: i32) -> String {
    match probe.check(a, c) {
        CheckOutcome::Passed(proof) => join_proof(&proof),
        CheckOutcome::Failed => FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::build_params::BuildParams;
    use crate::probe::checksum::string_hash;
    use crate::probe::witness::Witness;

    fn probe() -> Probe {
        Probe::new(BuildParams::new(5, string_hash("10"), "nsClass"))
    }

    #[test]
    fn test_success_string() {
        let out = call(&probe(), 2, 3);
        let parts: Vec<&str> = out.split(',').collect();
        assert_eq!(parts.len(), 3);
        assert!(Witness::is_well_formed(parts[1]));
        assert_eq!(parts[2], "7");
    }

    #[test]
    fn test_failure_string_hides_derived() {
        let out = call(&probe(), 2, 2);
        assert_eq!(out, FAILURE);
        assert!(!out.contains('7'));
    }
}
