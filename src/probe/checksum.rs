//! Name-keyed checksum dispatch.
//!
//! The verifier never calls the checksum routine directly. It looks the
//! routine up by symbol in a [`ChecksumRegistry`] and calls through the
//! returned function pointer, so no static call edge links the probe to the
//! hash. Entries are keyed by a digest of the symbol; names are not stored.

use core::hint::black_box;
use std::panic::{self, AssertUnwindSafe};

use crate::probe::error::ProbeError;

pub use crate::probe::secrets::string_hash;

/// Signature of a registered checksum routine.
pub type ChecksumFn = fn(&str) -> i32;

/// Compile-time symbol digest: FNV-1a with a rotate per byte.
pub const fn symbol_key(name: &str) -> u32 {
    let mut hash = 0x811C9DC5u32;
    let bytes = name.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(0x01000193);
        hash = hash.rotate_left(7);
        i += 1;
    }

    hash
}

#[derive(Clone, Copy)]
struct Entry {
    key: u32,
    routine: ChecksumFn,
}

/// Symbol table of checksum routines.
#[derive(Clone, Default)]
pub struct ChecksumRegistry {
    entries: Vec<Entry>,
}

impl ChecksumRegistry {
    pub fn empty() -> Self {
        ChecksumRegistry { entries: Vec::new() }
    }

    /// Registry with [`string_hash`] bound to `symbol`.
    pub fn for_symbol(symbol: &str) -> Self {
        let mut registry = Self::empty();
        registry.register(symbol, string_hash);
        registry
    }

    /// Bind `routine` to `symbol`, replacing any previous binding.
    pub fn register(&mut self, symbol: &str, routine: ChecksumFn) {
        let key = symbol_key(symbol);
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.routine = routine,
            None => self.entries.push(Entry { key, routine }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline(never)]
    pub fn resolve(&self, symbol: &str) -> Result<ChecksumFn, ProbeError> {
        let key = black_box(symbol_key(symbol));
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| black_box(e.routine))
            .ok_or(ProbeError::UnresolvedRoutine)
    }

    /// Resolve `symbol` and run it over `input`. A panicking routine is
    /// reported as [`ProbeError::RoutineFault`].
    pub fn invoke(&self, symbol: &str, input: &str) -> Result<i32, ProbeError> {
        let routine = self.resolve(symbol)?;
        panic::catch_unwind(AssertUnwindSafe(|| routine(input)))
            .map_err(|_| ProbeError::RoutineFault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reversed_hash(input: &str) -> i32 {
        string_hash(&input.chars().rev().collect::<String>())
    }

    #[test]
    fn test_string_hash_known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("9"), 57);
        assert_eq!(string_hash("10"), 1567);
        assert_eq!(string_hash("-1"), 45 * 31 + 49);
        assert_eq!(string_hash("hello"), 99162322);
        // Wraps past i32::MAX
        assert_eq!(string_hash("hello world"), 1794106052);
        assert_eq!(string_hash("polygenelubricants"), i32::MIN);
    }

    #[test]
    fn test_string_hash_is_order_sensitive() {
        assert_ne!(string_hash("12"), string_hash("21"));
    }

    #[test]
    fn test_string_hash_uses_utf16_units() {
        // U+00E9 is one UTF-16 unit (0xE9); U+1F600 is a surrogate pair
        assert_eq!(string_hash("\u{e9}"), 0xE9);
        assert_eq!(string_hash("\u{1F600}"), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn test_symbol_key_is_const_and_distinct() {
        const KEY: u32 = symbol_key("hashCode");
        assert_eq!(KEY, symbol_key("hashCode"));
        assert_ne!(symbol_key("hashCode"), symbol_key("hashcode"));
    }

    #[test]
    fn test_resolve_registered_symbol() {
        let registry = ChecksumRegistry::for_symbol("qWxTzRb");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.invoke("qWxTzRb", "10"), Ok(1567));
    }

    #[test]
    fn test_resolve_unknown_symbol_fails() {
        let registry = ChecksumRegistry::for_symbol("qWxTzRb");
        assert_eq!(
            registry.invoke("hashCode", "10"),
            Err(ProbeError::UnresolvedRoutine)
        );
        assert!(ChecksumRegistry::empty().resolve("qWxTzRb").is_err());
    }

    #[test]
    fn test_panicking_routine_is_a_fault() {
        fn faulty(_: &str) -> i32 {
            panic!("routine fault")
        }
        let mut registry = ChecksumRegistry::empty();
        registry.register("sym", faulty);
        assert_eq!(registry.invoke("sym", "10"), Err(ProbeError::RoutineFault));
    }

    #[test]
    fn test_register_replaces_binding() {
        let mut registry = ChecksumRegistry::for_symbol("sym");
        registry.register("sym", reversed_hash);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.invoke("sym", "12"), Ok(string_hash("21")));
    }
}
