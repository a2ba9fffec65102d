//! Internal error taxonomy.
//!
//! None of these reach a caller of the verification core: `check` folds every
//! variant into `CheckOutcome::Failed`. Provisioning and adapter marshalling
//! return them directly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("checksum routine could not be resolved")]
    UnresolvedRoutine,

    #[error("checksum routine faulted")]
    RoutineFault,

    #[error("checksum comparison failed")]
    ChecksumMismatch,

    #[error("secret {index} = {value} is outside the provisioning range")]
    SecretOutOfRange { index: u8, value: i32 },

    #[error("invalid host arguments: {0}")]
    InvalidArguments(String),
}
