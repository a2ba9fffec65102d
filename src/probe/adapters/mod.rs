//! Host boundary adapters.
//!
//! Three encodings of the same contract. Each unpacks two integers, calls
//! [`Probe::check`](crate::probe::Probe::check) and renders the outcome in its
//! host's convention. A failed check is forwarded as the host's uniform
//! failure signal, nothing more specific.

pub mod cordova;
pub mod native_script;
pub mod react_native;

use std::fmt;
use std::str::FromStr;

use crate::probe::error::ProbeError;
use crate::probe::verifier::Proof;

/// Host runtimes with an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Cordova,
    ReactNative,
    NativeScript,
}

impl Host {
    pub const ALL: [Host; 3] = [Host::Cordova, Host::ReactNative, Host::NativeScript];

    pub fn name(&self) -> &'static str {
        match self {
            Host::Cordova => "cordova",
            Host::ReactNative => "react-native",
            Host::NativeScript => "native-script",
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Host {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Host::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProbeError::InvalidArguments(format!("unknown host {s:?}")))
    }
}

/// `token,witness,derived`
pub(crate) fn join_proof(proof: &Proof) -> String {
    format!("{},{},{}", proof.token(), proof.witness(), proof.derived())
}
