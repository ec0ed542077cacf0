//! Host-based tests for the Morse transmitter
//!
//! The helpers here run a transmission on a virtual clock and copy the
//! recorded line activity into plain `std` collections for assertions.

use morse_core::test_utils::{Pulse, Transition, VirtualClock};
use morse_core::{Duration, InvalidCharacterError, Transmitter};

#[cfg(test)]
mod table_tests;

/// Line activity captured from one `send`
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub transitions: Vec<Transition>,
    pub pulses: Vec<Pulse>,
    pub elapsed: Duration,
}

/// Send `message` at the given unit on a fresh virtual clock
pub fn record(unit: Duration, message: &str) -> Result<Recording, InvalidCharacterError> {
    let clock = VirtualClock::new();
    let mut tx = Transmitter::new(unit, clock.sink(), clock.delay());
    let result = tx.send(message);
    drop(tx);

    assert!(!clock.overflowed(), "recording buffer too small for {:?}", message);
    result.map(|()| Recording {
        transitions: clock.transitions().to_vec(),
        pulses: clock.pulses().to_vec(),
        elapsed: clock.now(),
    })
}

/// Closed-form line time of a message, computed from the rendered codes
///
/// Every rendered symbol is followed by a one-unit gap: `*` is 1 + 1,
/// `-` is 3 + 1 and the space character's gap is 6 + 1.
pub fn expected_units(message: &str) -> u32 {
    message
        .chars()
        .filter_map(|c| morse_core::letter_code(c).ok())
        .flat_map(|code| code.to_string().chars().collect::<Vec<_>>())
        .map(|symbol| match symbol {
            '*' => 2,
            '-' => 4,
            _ => 7,
        })
        .sum()
}
