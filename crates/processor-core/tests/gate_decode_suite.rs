//! Gate decode integration suite: field map, purity, truncation, and contract failures.

#![allow(clippy::pedantic, clippy::nursery)]

use processor_core::{
    decode_gate, decode_gate_traced, AccessPermissions, CoreConfig, Gate, GateDecodeError,
    GateField, TraceEvent, TraceSink, Word36, GATE_FIELD_TABLE, GATE_WORD_COUNT,
};
use proptest::prelude::*;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use serde_json as _;
use thiserror as _;

fn words(values: [u64; GATE_WORD_COUNT]) -> [Word36; GATE_WORD_COUNT] {
    values.map(Word36::new)
}

struct CountingSink(usize);

impl TraceSink for CountingSink {
    fn on_event(&mut self, _event: TraceEvent) {
        self.0 += 1;
    }
}

#[test]
fn fully_populated_gate_decodes_every_field() {
    let buffer = words([
        0o447_777_612_345,
        0o754_321_765_432,
        0o000_252_234_567,
        0o111_111_111_111,
        0o222_222_222_222,
    ]);
    let gate = decode_gate(&buffer).expect("five words decode");

    assert_eq!(
        gate.general_access_permissions(),
        AccessPermissions::new(true, false, false)
    );
    assert!(gate.special_access_permissions().can_enter());
    assert!(gate.lib_flag());
    assert!(gate.goto_inhibit());
    assert!(gate.designator_inhibit());
    assert!(gate.access_key_inhibit());
    assert!(gate.latent_parameter0_inhibit());
    assert!(gate.latent_parameter1_inhibit());
    assert_eq!(gate.access_lock().composite(), 0o612_345);

    assert_eq!(gate.target_level(), 0o7);
    assert_eq!(gate.target_bdi(), 0o54_321);
    assert_eq!(gate.target_offset(), 0o765_432);

    assert_eq!(gate.basic_mode_base_register(), 0o2);
    assert_eq!(gate.basic_mode_base_register_index(), 14);
    assert_eq!(
        gate.designator_register_value().composite().value(),
        0o000_052_000_000
    );
    assert_eq!(gate.new_access_key().composite(), 0o234_567);

    assert_eq!(gate.latent_parameter_value0().value(), 0o111_111_111_111);
    assert_eq!(gate.latent_parameter_value1().value(), 0o222_222_222_222);
}

#[test]
fn top_bit_of_word0_only_grants_general_enter() {
    let gate = Gate::from_words(&words([0o400_000_000_000, 0, 0, 0, 0]));
    assert!(gate.general_access_permissions().can_enter());
    assert_eq!(gate.special_access_permissions(), AccessPermissions::NONE);
    assert!(!gate.lib_flag());
    assert!(!gate.goto_inhibit());
    assert!(!gate.designator_inhibit());
    assert!(!gate.access_key_inhibit());
    assert!(!gate.latent_parameter0_inhibit());
    assert!(!gate.latent_parameter1_inhibit());
    assert_eq!(gate.access_lock().ring(), 0);
    assert_eq!(gate.access_lock().domain(), 0);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
fn undersized_buffers_are_rejected(#[case] len: usize) {
    let buffer = vec![Word36::ZERO; len];
    let err = decode_gate(&buffer).expect_err("undersized buffer must fail");
    assert_eq!(err, GateDecodeError::BufferTooShort { len });
}

#[test]
fn traced_decode_matches_untraced_decode() {
    let buffer = words([0o123, 0o456, 0o777_000_000_000, 1, 2]);
    let mut sink = CountingSink(0);
    let config = CoreConfig {
        tracing_enabled: true,
    };
    let traced = decode_gate_traced(&buffer, &config, &mut sink);
    assert_eq!(traced, decode_gate(&buffer));
    assert_eq!(sink.0, 1);
}

proptest! {
    #[test]
    fn decode_is_pure(values in prop::array::uniform5(0u64..=Word36::MASK)) {
        let buffer = words(values);
        prop_assert_eq!(decode_gate(&buffer), decode_gate(&buffer));
    }

    #[test]
    fn every_table_field_matches_its_bit_range(values in prop::array::uniform5(0u64..=Word36::MASK)) {
        let buffer = words(values);
        let gate = Gate::from_words(&buffer);
        for (field, spec) in GATE_FIELD_TABLE {
            let raw = spec.extract(buffer[spec.word()]);
            let decoded = match field {
                GateField::GeneralAccessEnter => u64::from(gate.general_access_permissions().can_enter()),
                GateField::SpecialAccessEnter => u64::from(gate.special_access_permissions().can_enter()),
                GateField::LibFlag => u64::from(gate.lib_flag()),
                GateField::GotoInhibit => u64::from(gate.goto_inhibit()),
                GateField::DesignatorInhibit => u64::from(gate.designator_inhibit()),
                GateField::AccessKeyInhibit => u64::from(gate.access_key_inhibit()),
                GateField::LatentParameter0Inhibit => u64::from(gate.latent_parameter0_inhibit()),
                GateField::LatentParameter1Inhibit => u64::from(gate.latent_parameter1_inhibit()),
                GateField::AccessLock => gate.access_lock().composite(),
                GateField::TargetLevel => u64::from(gate.target_level()),
                GateField::TargetBdi => u64::from(gate.target_bdi()),
                GateField::TargetOffset => u64::from(gate.target_offset()),
                GateField::BasicModeBaseRegister => u64::from(gate.basic_mode_base_register()),
                GateField::DesignatorBits => {
                    gate.designator_register_value().composite().value() >> spec.shift()
                }
                GateField::NewAccessKey => gate.new_access_key().composite(),
                GateField::LatentParameterValue0 => gate.latent_parameter_value0().value(),
                GateField::LatentParameterValue1 => gate.latent_parameter_value1().value(),
            };
            prop_assert_eq!(decoded, raw, "{:?}", field);
        }
    }

    #[test]
    fn wide_bdi_input_is_truncated_to_15_bits(bdi in (1u64 << 15)..(1u64 << 18)) {
        let buffer = words([0, bdi << 18, 0, 0, 0]);
        let gate = Gate::from_words(&buffer);
        prop_assert_eq!(u64::from(gate.target_bdi()), bdi % (1 << 15));
        prop_assert_eq!(u64::from(gate.target_level()), bdi >> 15);
        prop_assert_eq!(gate.target_offset(), 0);
    }

    #[test]
    fn permission_sub_bits_never_decode(word0 in 0u64..=Word36::MASK) {
        let gate = Gate::from_words(&words([word0, 0, 0, 0, 0]));
        for perms in [gate.general_access_permissions(), gate.special_access_permissions()] {
            prop_assert!(!perms.can_read());
            prop_assert!(!perms.can_write());
        }
    }

    #[test]
    fn trailing_words_do_not_change_the_gate(
        values in prop::array::uniform5(0u64..=Word36::MASK),
        extra in prop::collection::vec(0u64..=Word36::MASK, 0..8),
    ) {
        let mut buffer: Vec<Word36> = words(values).to_vec();
        let exact = decode_gate(&buffer);
        buffer.extend(extra.into_iter().map(Word36::new));
        prop_assert_eq!(decode_gate(&buffer), exact);
    }
}
