#![no_main]

use libfuzzer_sys::fuzz_target;
use processor_core::{
    decode_gate, AddressingException, Gate, Interrupt, InterruptClass, InvalidInstruction,
    RcsGenericStackUnderOverflow, ReferenceViolation, Word36, GATE_WORD_COUNT,
};

fuzz_target!(|data: &[u8]| {
    let words: Vec<Word36> = data
        .chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            Word36::new(u64::from_be_bytes(bytes))
        })
        .collect();

    match decode_gate(&words) {
        Ok(gate) => {
            assert!(words.len() >= GATE_WORD_COUNT);
            assert!(gate.target_level() <= 0o7);
            assert!(gate.target_bdi() <= 0o77777);
            assert!(gate.target_offset() <= 0o777_777);
            assert!(gate.basic_mode_base_register() <= 0o3);
            assert_eq!(decode_gate(&words), Ok(gate));
            assert_eq!(Gate::from_words(&gate.to_words()), gate);
        }
        Err(_) => assert!(words.len() < GATE_WORD_COUNT),
    }

    if data.len() < 8 {
        return;
    }
    let relative_address = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    let interrupts: [Interrupt; 4] = [
        ReferenceViolation::new(data[0], data[1] & 1 != 0).into(),
        AddressingException::new(data[0], data[1], u16::from_be_bytes([data[2], data[3]])).into(),
        RcsGenericStackUnderOverflow::new(data[0], data[1], relative_address).into(),
        InvalidInstruction::new(data[0]).into(),
    ];
    for interrupt in interrupts {
        assert!(!interrupt.is_deferrable());
        assert_eq!(
            InterruptClass::from_u8(interrupt.class().as_u8()),
            Some(interrupt.class())
        );
        assert!(interrupt.status_word0().value() <= Word36::MASK);
        assert!(interrupt.status_word1().value() <= Word36::MASK);
    }
});
