//! Build-time parameters.
//!
//! `build.rs` writes the per-build constants into `OUT_DIR/build_params.rs`:
//!
//! ```text
//! SECRET_OFFSET        LIFTPROBE_SECRET_OFFSET, or 2*s2 + s3
//! EXPECTED_HASH_BIAS   LIFTPROBE_EXPECTED_HASH_BIAS, or hash(s1 + s2 + s3)
//! CHECKSUM_SYMBOL      LIFTPROBE_FUNCTION, or 7 random letters
//! ```
//!
//! The values are fixed for the lifetime of the build and shared by every
//! host adapter. They are never logged; `Debug` is redacted.

use std::borrow::Cow;
use std::fmt;

mod compiled {
    include!(concat!(env!("OUT_DIR"), "/build_params.rs"));
}

/// Script-layer inputs `(a, c)` of the compiled build, when `build.rs` derived
/// the constants from a secret triple.
#[cfg(test)]
pub(crate) const PROVISIONED_INPUTS: Option<(i32, i32)> = compiled::PROVISIONED_INPUTS;

#[derive(Clone, PartialEq, Eq)]
pub struct BuildParams {
    secret_offset: i32,
    expected_hash_bias: i32,
    checksum_symbol: Cow<'static, str>,
}

impl BuildParams {
    pub fn new(
        secret_offset: i32,
        expected_hash_bias: i32,
        checksum_symbol: impl Into<Cow<'static, str>>,
    ) -> Self {
        BuildParams {
            secret_offset,
            expected_hash_bias,
            checksum_symbol: checksum_symbol.into(),
        }
    }

    /// The constants injected into this build.
    pub const fn compiled() -> Self {
        BuildParams {
            secret_offset: compiled::SECRET_OFFSET,
            expected_hash_bias: compiled::EXPECTED_HASH_BIAS,
            checksum_symbol: Cow::Borrowed(compiled::CHECKSUM_SYMBOL),
        }
    }

    pub fn secret_offset(&self) -> i32 {
        self.secret_offset
    }

    pub fn expected_hash_bias(&self) -> i32 {
        self.expected_hash_bias
    }

    pub fn checksum_symbol(&self) -> &str {
        &self.checksum_symbol
    }
}

impl fmt::Debug for BuildParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildParams")
            .field("secret_offset", &"<redacted>")
            .field("expected_hash_bias", &"<redacted>")
            .field("checksum_symbol", &"<redacted>")
            .finish()
    }
}
