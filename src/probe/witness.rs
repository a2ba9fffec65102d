//! Per-call witness strings.

use std::fmt;

use rand::Rng;

/// Witness symbols: lowercase, uppercase, digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const WITNESS_LEN: usize = 10;

/// Random 10-symbol alphanumeric string returned with a passing check.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Witness([u8; WITNESS_LEN]);

impl Witness {
    /// Draw `WITNESS_LEN` independent uniform symbols from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = [0u8; WITNESS_LEN];
        for slot in symbols.iter_mut() {
            *slot = ALPHABET[rng.random_range(0..ALPHABET.len())];
        }
        Witness(symbols)
    }

    pub fn as_str(&self) -> &str {
        // Every byte comes from ALPHABET, which is ASCII.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Whether `s` has the shape of a witness.
    pub fn is_well_formed(s: &str) -> bool {
        s.len() == WITNESS_LEN && s.bytes().all(|b| ALPHABET.contains(&b))
    }
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Witness({})", self.as_str())
    }
}
