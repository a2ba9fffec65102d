//! # Code-Lifting Detection Probe
//!
//! Proves at call time that a fragment still runs inside the build it was
//! compiled into. The caller passes two integers; the probe only passes when
//! they combine with this build's injected secret offset into a sum whose
//! checksum equals the build's expected bias.
//!
//! ```no_run
//! use liftprobe::probe::{check, CheckOutcome};
//!
//! match check(1_204, -377) {
//!     CheckOutcome::Passed(proof) => println!("{}", proof.witness()),
//!     CheckOutcome::Failed => println!("lifted"),
//! }
//! ```

use std::sync::OnceLock;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub mod adapters;
pub mod build_params;
pub mod checksum;
pub mod error;
pub mod provision;
pub mod secrets;
pub mod verifier;
pub mod witness;

pub use adapters::Host;
pub use build_params::BuildParams;
pub use checksum::{string_hash, ChecksumRegistry};
pub use error::ProbeError;
pub use provision::Provisioning;
pub use secrets::SecretTriple;
pub use verifier::{CheckOutcome, Proof};
pub use witness::Witness;

static COMPILED_PROBE: OnceLock<Probe> = OnceLock::new();

/// Build parameters bound to a checksum registry.
///
/// Immutable once constructed; share it freely between threads and adapters.
#[derive(Clone)]
pub struct Probe {
    params: BuildParams,
    registry: ChecksumRegistry,
}

impl Probe {
    /// Probe with the platform checksum registered under the build's symbol.
    pub fn new(params: BuildParams) -> Self {
        let registry = ChecksumRegistry::for_symbol(params.checksum_symbol());
        Probe { params, registry }
    }

    pub fn with_registry(params: BuildParams, registry: ChecksumRegistry) -> Self {
        Probe { params, registry }
    }

    /// The probe carrying this build's injected constants.
    pub fn compiled() -> &'static Probe {
        COMPILED_PROBE.get_or_init(|| Probe::new(BuildParams::compiled()))
    }

    /// Exported name of the probe function on the host surface.
    pub fn function_name(&self) -> &str {
        self.params.checksum_symbol()
    }

    /// Run the check with a generator seeded fresh for this call.
    pub fn check(&self, a: i32, c: i32) -> CheckOutcome {
        let mut rng = SmallRng::from_rng(&mut rand::rng());
        self.check_with_rng(a, c, &mut rng)
    }

    pub fn check_with_rng<R: Rng + ?Sized>(&self, a: i32, c: i32, rng: &mut R) -> CheckOutcome {
        verifier::evaluate(&self.params, &self.registry, a, c, rng)
    }
}

/// Check `a` and `c` against the compiled build parameters.
pub fn check(a: i32, c: i32) -> CheckOutcome {
    Probe::compiled().check(a, c)
}

#[macro_export]
macro_rules! setup_probe {
    () => {
        $crate::probe::Probe::compiled()
    };
    ($offset:expr, $bias:expr, $symbol:expr) => {
        $crate::probe::Probe::new($crate::probe::BuildParams::new($offset, $bias, $symbol))
    };
}
