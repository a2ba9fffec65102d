//! Per-build secret arithmetic.
//!
//! Shared verbatim between the library and `build.rs` (pulled in with
//! `#[path]`), so this file must stay free of crate paths and third-party
//! dependencies.

/// Inclusive upper bound for each provisioning secret.
pub const SECRET_MAX: i32 = 10_737_418;

/// Platform string hash: `h = h * 31 + unit` over UTF-16 code units,
/// 32-bit signed with wraparound.
pub fn string_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Three provisioning secrets from which every per-build constant derives.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SecretTriple {
    pub s1: i32,
    pub s2: i32,
    pub s3: i32,
}

impl SecretTriple {
    pub const fn new(s1: i32, s2: i32, s3: i32) -> Self {
        SecretTriple { s1, s2, s3 }
    }

    /// Index (1-based) and value of the first secret outside `0..=SECRET_MAX`.
    pub fn out_of_range(&self) -> Option<(u8, i32)> {
        [self.s1, self.s2, self.s3]
            .iter()
            .position(|s| !(0..=SECRET_MAX).contains(s))
            .map(|i| (i as u8 + 1, [self.s1, self.s2, self.s3][i]))
    }

    /// `2*s2 + s3`
    pub fn secret_offset(&self) -> i32 {
        self.s2.wrapping_mul(2).wrapping_add(self.s3)
    }

    /// Inputs `(a, c)` handed to the script layer. `a + offset + c` equals the
    /// secret sum.
    pub fn script_inputs(&self) -> (i32, i32) {
        (self.s1.wrapping_sub(self.s3), self.s3.wrapping_sub(self.s2))
    }

    pub fn secret_sum(&self) -> i32 {
        self.s1.wrapping_add(self.s2).wrapping_add(self.s3)
    }

    /// Checksum of the decimal secret sum.
    pub fn expected_hash_bias(&self) -> i32 {
        string_hash(&self.secret_sum().to_string())
    }
}
