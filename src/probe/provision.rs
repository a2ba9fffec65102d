//! Per-build provisioning.
//!
//! Produces the secrets and identifier tokens for one application build.
//! [`Provisioning::env_vars`] holds exactly the variables `build.rs` reads.
//! The class and plugin tokens and the script inputs stay in the serialized
//! record for whatever packages the host plugin and script layer.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::probe::build_params::BuildParams;
use crate::probe::error::ProbeError;
use crate::probe::secrets::{string_hash, SecretTriple, SECRET_MAX};

const CLASS_NAME_LEN: usize = 3;
const FUNCTION_NAME_LEN: usize = 7;
const PLUGIN_PREFIX_LEN: usize = 2;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Per-build naming tokens for the host-facing plugin surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifiers {
    pub class_name: String,
    pub function_name: String,
    pub plugin_name: String,
}

impl Identifiers {
    pub fn generate<R: Rng + ?Sized>(app_id: &str, rng: &mut R) -> Self {
        Identifiers {
            class_name: random_letters(rng, CLASS_NAME_LEN),
            function_name: random_letters(rng, FUNCTION_NAME_LEN),
            plugin_name: format!(
                "{}{}",
                random_letters(rng, PLUGIN_PREFIX_LEN),
                string_hash(app_id).unsigned_abs()
            ),
        }
    }
}

fn random_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptInputs {
    pub a: i32,
    pub c: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Secrets {
    pub s1: i32,
    pub s2: i32,
    pub s3: i32,
}

/// Everything one application build needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provisioning {
    pub app_id: String,
    pub secrets: Secrets,
    pub secret_offset: i32,
    pub expected_hash_bias: i32,
    pub script_inputs: ScriptInputs,
    pub identifiers: Identifiers,
}

impl Provisioning {
    /// Fresh secrets and identifiers for `app_id`.
    pub fn generate<R: Rng + ?Sized>(app_id: &str, rng: &mut R) -> Self {
        let triple = SecretTriple::new(
            rng.random_range(0..=SECRET_MAX),
            rng.random_range(0..=SECRET_MAX),
            rng.random_range(0..=SECRET_MAX),
        );
        let identifiers = Identifiers::generate(app_id, rng);
        let record = Self::assemble(app_id, triple, identifiers);
        info!(
            app_id = %record.app_id,
            plugin = %record.identifiers.plugin_name,
            "generated provisioning record"
        );
        record
    }

    /// Provision from known secrets, rejecting any outside `0..=SECRET_MAX`.
    pub fn from_secrets(
        app_id: &str,
        triple: SecretTriple,
        identifiers: Identifiers,
    ) -> Result<Self, ProbeError> {
        if let Some((index, value)) = triple.out_of_range() {
            return Err(ProbeError::SecretOutOfRange { index, value });
        }
        Ok(Self::assemble(app_id, triple, identifiers))
    }

    fn assemble(app_id: &str, triple: SecretTriple, identifiers: Identifiers) -> Self {
        let (a, c) = triple.script_inputs();
        Provisioning {
            app_id: app_id.to_string(),
            secrets: Secrets {
                s1: triple.s1,
                s2: triple.s2,
                s3: triple.s3,
            },
            secret_offset: triple.secret_offset(),
            expected_hash_bias: triple.expected_hash_bias(),
            script_inputs: ScriptInputs { a, c },
            identifiers,
        }
    }

    /// Parameters equivalent to building with [`Self::env_vars`].
    pub fn build_params(&self) -> BuildParams {
        BuildParams::new(
            self.secret_offset,
            self.expected_hash_bias,
            self.identifiers.function_name.clone(),
        )
    }

    /// Build-script inputs for this record.
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("LIFTPROBE_SECRET_1", self.secrets.s1.to_string()),
            ("LIFTPROBE_SECRET_2", self.secrets.s2.to_string()),
            ("LIFTPROBE_SECRET_3", self.secrets.s3.to_string()),
            ("LIFTPROBE_FUNCTION", self.identifiers.function_name.clone()),
        ]
    }
}
