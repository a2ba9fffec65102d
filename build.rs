// build.rs

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[allow(dead_code)]
#[path = "src/probe/secrets.rs"]
mod secrets;

use secrets::{SecretTriple, SECRET_MAX};

const TRACKED_VARS: [&str; 6] = [
    "LIFTPROBE_SECRET_OFFSET",
    "LIFTPROBE_EXPECTED_HASH_BIAS",
    "LIFTPROBE_SECRET_1",
    "LIFTPROBE_SECRET_2",
    "LIFTPROBE_SECRET_3",
    "LIFTPROBE_FUNCTION",
];

fn main() {
    let mut entropy = BuildEntropy::new(generate_random_seed_u64());

    // Direct injection wins over a secret triple; with neither, draw a fresh triple.
    let (offset, bias, inputs) = match direct_params() {
        Some((offset, bias)) => (offset, bias, None),
        None => {
            let triple = secret_triple_from_env().unwrap_or_else(|| {
                SecretTriple::new(
                    entropy.next_secret(),
                    entropy.next_secret(),
                    entropy.next_secret(),
                )
            });
            if let Some((index, value)) = triple.out_of_range() {
                panic!("LIFTPROBE_SECRET_{index} = {value} is outside 0..={SECRET_MAX}");
            }
            (
                triple.secret_offset(),
                triple.expected_hash_bias(),
                Some(triple.script_inputs()),
            )
        }
    };

    let symbol = match env::var("LIFTPROBE_FUNCTION") {
        Ok(name) if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric()) => name,
        Ok(name) if !name.is_empty() => {
            panic!("LIFTPROBE_FUNCTION must be ASCII alphanumeric, got {name:?}")
        }
        _ => entropy.next_letters(7),
    };

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("build_params.rs");
    let mut f = File::create(&dest_path).unwrap();

    writeln!(f, "pub(crate) const SECRET_OFFSET: i32 = {offset};").unwrap();
    writeln!(f, "pub(crate) const EXPECTED_HASH_BIAS: i32 = {bias};").unwrap();
    writeln!(f, "pub(crate) const CHECKSUM_SYMBOL: &str = {symbol:?};").unwrap();
    writeln!(f, "#[cfg(test)]").unwrap();
    match inputs {
        Some((a, c)) => writeln!(
            f,
            "pub(crate) const PROVISIONED_INPUTS: Option<(i32, i32)> = Some(({a}, {c}));"
        )
        .unwrap(),
        None => writeln!(
            f,
            "pub(crate) const PROVISIONED_INPUTS: Option<(i32, i32)> = None;"
        )
        .unwrap(),
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/probe/secrets.rs");
    for var in TRACKED_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
}

fn parse_env_i32(name: &str) -> Option<i32> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<i32>() {
        Ok(value) => Some(value),
        Err(err) => panic!("{name} must be a 32-bit integer ({err}), got {raw:?}"),
    }
}

fn direct_params() -> Option<(i32, i32)> {
    match (
        parse_env_i32("LIFTPROBE_SECRET_OFFSET"),
        parse_env_i32("LIFTPROBE_EXPECTED_HASH_BIAS"),
    ) {
        (Some(offset), Some(bias)) => Some((offset, bias)),
        (None, None) => None,
        _ => panic!("LIFTPROBE_SECRET_OFFSET and LIFTPROBE_EXPECTED_HASH_BIAS must be set together"),
    }
}

fn secret_triple_from_env() -> Option<SecretTriple> {
    match (
        parse_env_i32("LIFTPROBE_SECRET_1"),
        parse_env_i32("LIFTPROBE_SECRET_2"),
        parse_env_i32("LIFTPROBE_SECRET_3"),
    ) {
        (Some(s1), Some(s2), Some(s3)) => Some(SecretTriple::new(s1, s2, s3)),
        (None, None, None) => None,
        _ => panic!("LIFTPROBE_SECRET_1..3 must all be set together"),
    }
}

/// xorshift64* stream over the build seed
struct BuildEntropy(u64);

impl BuildEntropy {
    fn new(seed: u64) -> Self {
        BuildEntropy(if seed == 0 { 0x9A3F_C5D7_2B61_E48F } else { seed })
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn next_secret(&mut self) -> i32 {
        (self.next_u64() % (SECRET_MAX as u64 + 1)) as i32
    }

    fn next_letters(&mut self, len: usize) -> String {
        const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
        (0..len)
            .map(|_| LETTERS[(self.next_u64() % LETTERS.len() as u64) as usize] as char)
            .collect()
    }
}

// Build-environment seed: clock, working directory, profile and manifest path.
fn generate_random_seed_u64() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let cwd = env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let profile = env::var("PROFILE").unwrap_or_default();
    let manifest = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();

    let mut seed = mix64(nanos as u64 ^ mix64((nanos >> 64) as u64));
    for source in [cwd.as_str(), profile.as_str(), manifest.as_str()] {
        // Length first so "ab" + "" and "a" + "b" diverge
        seed = mix64(seed ^ source.len() as u64);
        for chunk in source.as_bytes().chunks(8) {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            seed = mix64(seed ^ u64::from_le_bytes(word));
        }
    }
    seed
}

// SplitMix64 finalizer
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
