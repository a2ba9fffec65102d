use liftprobe::probe::adapters::{native_script, react_native};
use liftprobe::probe::witness::{ALPHABET, WITNESS_LEN};
use liftprobe::probe::{
    string_hash, BuildParams, CheckOutcome, ChecksumRegistry, Probe, Provisioning, SecretTriple,
    Witness,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SYMBOL: &str = "pRpTest";

fn scenario_probe() -> Probe {
    liftprobe::setup_probe!(5, string_hash("10"), SYMBOL)
}

#[test]
fn scenario_two_plus_three_passes() {
    let proof = scenario_probe()
        .check(2, 3)
        .into_proof()
        .expect("2 + 5 + 3 = 10");
    assert_eq!(proof.derived(), 7);
    assert_eq!(proof.witness().as_str().len(), WITNESS_LEN);
}

#[test]
fn scenario_two_plus_two_fails() {
    assert_eq!(scenario_probe().check(2, 2), CheckOutcome::Failed);
    assert_eq!(native_script::call(&scenario_probe(), 2, 2), "0,0,0");
}

#[test]
fn witnesses_stay_in_alphabet() {
    let probe = scenario_probe();
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    for _ in 0..10_000 {
        let proof = probe.check_with_rng(2, 3, &mut rng).into_proof().unwrap();
        let witness = proof.witness().as_str();
        assert_eq!(witness.len(), 10);
        assert!(witness.bytes().all(|b| ALPHABET.contains(&b)), "{witness}");
    }
}

#[test]
fn foreign_registry_never_passes() {
    let params = BuildParams::new(5, string_hash("10"), SYMBOL);
    let probe = Probe::with_registry(params, ChecksumRegistry::for_symbol("notOurs"));
    assert!(!probe.check(2, 3).is_passed());

    let mut out = Vec::new();
    react_native::invoke(&probe, 2, 3, |t, w, d| out.extend([t, w, d]));
    assert_eq!(out, ["0", "0", "0"]);
}

proptest! {
    #[test]
    fn passes_iff_sum_checksum_matches_bias(
        offset in any::<i32>(),
        bias in any::<i32>(),
        a in any::<i32>(),
        c in any::<i32>(),
        seed in any::<u64>(),
    ) {
        let probe = Probe::new(BuildParams::new(offset, bias, SYMBOL));
        let mut rng = SmallRng::seed_from_u64(seed);
        let sum = a.wrapping_add(offset).wrapping_add(c);

        let outcome = probe.check_with_rng(a, c, &mut rng);
        prop_assert_eq!(outcome.is_passed(), string_hash(&sum.to_string()) == bias);
    }

    #[test]
    fn passing_proof_carries_token_and_derived(
        offset in -1_000_000i32..1_000_000,
        a in -1_000_000i32..1_000_000,
        c in -1_000_000i32..1_000_000,
        seed in any::<u64>(),
    ) {
        let sum = a + offset + c;
        let bias = string_hash(&sum.to_string());
        let probe = Probe::new(BuildParams::new(offset, bias, SYMBOL));
        let mut rng = SmallRng::seed_from_u64(seed);

        let proof = probe.check_with_rng(a, c, &mut rng).into_proof().unwrap();
        prop_assert_eq!(proof.derived(), a + offset);
        prop_assert!(Witness::is_well_formed(proof.witness().as_str()));
        prop_assert_eq!(
            proof.token(),
            i64::from(bias) + i64::from(string_hash(proof.witness().as_str()))
        );
    }

    #[test]
    fn failure_never_flips_with_witness(a in any::<i32>(), c in any::<i32>(), seed in any::<u64>()) {
        let offset = 5;
        let sum = a.wrapping_add(offset).wrapping_add(c);
        prop_assume!(string_hash(&sum.to_string()) != string_hash("10"));

        let probe = scenario_probe();
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..16 {
            prop_assert_eq!(probe.check_with_rng(a, c, &mut rng), CheckOutcome::Failed);
        }
    }

    #[test]
    fn string_hash_is_deterministic(s in ".*") {
        prop_assert_eq!(string_hash(&s), string_hash(&s.clone()));
    }

    #[test]
    fn provisioned_secrets_pass(
        s1 in 0i32..=10_737_418,
        s2 in 0i32..=10_737_418,
        s3 in 0i32..=10_737_418,
    ) {
        let mut rng = SmallRng::seed_from_u64(u64::from(s1.unsigned_abs()));
        let identifiers = liftprobe::probe::provision::Identifiers::generate("com.example.app", &mut rng);
        let record = Provisioning::from_secrets(
            "com.example.app",
            SecretTriple::new(s1, s2, s3),
            identifiers,
        ).unwrap();

        let probe = Probe::new(record.build_params());
        let inputs = record.script_inputs;
        prop_assert!(probe.check_with_rng(inputs.a, inputs.c, &mut rng).is_passed());
    }
}
