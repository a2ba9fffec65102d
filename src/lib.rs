//! Code-lifting detection probe.
//!
//! See [`probe`] for the verification core, build parameters and the host
//! adapters.

pub mod cli;
pub mod probe;
