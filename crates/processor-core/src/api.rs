//! Host-facing configuration and deterministic trace hooks.
//!
//! Surrounding layers (access control, trap delivery) call the traced entry
//! points so decode activity can be observed without this crate choosing a
//! logging backend.

use crate::{decode_gate, Gate, GateDecodeError, Interrupt, InterruptClass, TargetAddress, Word36};

/// Top-level immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CoreConfig {
    /// Enables trace callback dispatch.
    pub tracing_enabled: bool,
}

/// Trace events in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum TraceEvent {
    /// A gate was decoded.
    GateDecoded {
        /// Decoded target address.
        target: TargetAddress,
    },
    /// A gate buffer was rejected before decoding.
    GateRejected {
        /// Length of the rejected buffer.
        buffer_len: usize,
    },
    /// An interrupt record was handed to delivery.
    InterruptRecognized {
        /// Architected class.
        class: InterruptClass,
        /// Short status field.
        short_status_field: u8,
        /// Interrupt status word 0.
        status_word0: Word36,
        /// Interrupt status word 1.
        status_word1: Word36,
    },
}

/// Sink trait for deterministic trace hooks.
pub trait TraceSink {
    /// Records an event in call order.
    fn on_event(&mut self, event: TraceEvent);
}

/// [`decode_gate`] with an event reported to `sink` when tracing is enabled.
///
/// # Errors
///
/// Returns [`GateDecodeError::BufferTooShort`] for buffers shorter than five
/// words.
pub fn decode_gate_traced<S>(
    buffer: &[Word36],
    config: &CoreConfig,
    sink: &mut S,
) -> Result<Gate, GateDecodeError>
where
    S: TraceSink + ?Sized,
{
    let result = decode_gate(buffer);
    if config.tracing_enabled {
        let event = match &result {
            Ok(gate) => TraceEvent::GateDecoded {
                target: gate.target(),
            },
            Err(GateDecodeError::BufferTooShort { len }) => {
                TraceEvent::GateRejected { buffer_len: *len }
            }
        };
        sink.on_event(event);
    }
    result
}

/// Converts a record into an [`Interrupt`], reporting it to `sink` when
/// tracing is enabled.
pub fn recognize_interrupt<I, S>(interrupt: I, config: &CoreConfig, sink: &mut S) -> Interrupt
where
    I: Into<Interrupt>,
    S: TraceSink + ?Sized,
{
    let interrupt = interrupt.into();
    if config.tracing_enabled {
        sink.on_event(TraceEvent::InterruptRecognized {
            class: interrupt.class(),
            short_status_field: interrupt.short_status_field(),
            status_word0: interrupt.status_word0(),
            status_word1: interrupt.status_word1(),
        });
    }
    interrupt
}
