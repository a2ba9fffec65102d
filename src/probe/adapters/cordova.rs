//! Cordova-style plugin boundary: `execute(action, args, callbackContext)`.

use serde_json::Value;

use crate::probe::adapters::join_proof;
use crate::probe::error::ProbeError;
use crate::probe::verifier::CheckOutcome;
use crate::probe::Probe;

/// Host callback pair. Exactly one of the two is called per handled action.
pub trait CallbackContext {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Dispatch a plugin action.
///
/// Returns `Ok(false)` when `action` is not the probe's exported function, so
/// the host can try other plugins. Arguments that are not two 32-bit integers
/// are a marshalling error, reported before the probe runs.
pub fn execute<C: CallbackContext + ?Sized>(
    probe: &Probe,
    action: &str,
    args: &[Value],
    ctx: &mut C,
) -> Result<bool, ProbeError> {
    if action != probe.function_name() {
        return Ok(false);
    }
    let a = int_arg(args, 0)?;
    let c = int_arg(args, 1)?;

    match probe.check(a, c) {
        CheckOutcome::Passed(proof) => ctx.success(&join_proof(&proof)),
        CheckOutcome::Failed => ctx.error(""),
    }
    Ok(true)
}

fn int_arg(args: &[Value], index: usize) -> Result<i32, ProbeError> {
    args.get(index)
        .and_then(Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| ProbeError::InvalidArguments(format!("argument {index} is not an int")))
}
