//! Timed transmission of Morse messages on a signal sink

use embedded_hal::delay::DelayNs;

use crate::encode::{encode, Encoded};
use crate::error::InvalidCharacterError;
use crate::hal::{hold, scale, Duration, SignalSink};
use crate::types::{CharacterCode, Symbol, TransmitterConfig, MAX_UNIT_MICROS};

/// Drives a signal sink through the timed on/off pattern of a message
///
/// Messages are validated in full before the first symbol is emitted, so a
/// rejected message never leaves a partial signal on the line. `send` blocks
/// for the whole transmission; taking `&mut self` keeps two transmissions
/// from interleaving on the same line.
pub struct Transmitter<S, D> {
    unit: Duration,
    sink: S,
    delay: D,
}

impl<S, D> Transmitter<S, D>
where
    S: SignalSink,
    D: DelayNs,
{
    /// Create a transmitter with the given dot duration
    ///
    /// # Panics
    /// Panics if `unit` is zero or longer than [`MAX_UNIT_MICROS`]. Neither
    /// can be keyed; both are configuration bugs, not input errors.
    pub fn new(unit: Duration, sink: S, delay: D) -> Self {
        assert!(unit.as_micros() > 0, "dot duration must be greater than 0");
        assert!(
            unit.as_micros() <= MAX_UNIT_MICROS,
            "dot duration exceeds the longest representable symbol"
        );
        Self { unit, sink, delay }
    }

    /// Create a transmitter from a validated configuration
    pub fn from_config(config: &TransmitterConfig, sink: S, delay: D) -> Self {
        Self::new(config.unit, sink, delay)
    }

    /// Dot duration
    pub fn unit(&self) -> Duration {
        self.unit
    }

    /// Total blocking time `send` would take for this message
    ///
    /// Saturates at the largest representable duration.
    pub fn duration_of(&self, message: &str) -> Result<Duration, InvalidCharacterError> {
        Ok(scale(self.unit, encode(message)?.units()))
    }

    /// Validate and transmit a message
    ///
    /// On error the sink has not been touched.
    pub fn send(&mut self, message: &str) -> Result<(), InvalidCharacterError> {
        let encoded = match encode(message) {
            Ok(encoded) => encoded,
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Rejected message: {}", err);
                return Err(err);
            }
        };

        self.send_encoded(&encoded);
        Ok(())
    }

    /// Transmit a message that has already been validated
    pub fn send_encoded(&mut self, encoded: &Encoded<'_>) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Sending {} symbols", encoded.symbol_count());

        for code in encoded.codes() {
            self.send_code(code);
        }
    }

    /// Transmit a single character code
    pub fn send_code(&mut self, code: CharacterCode) {
        for &symbol in code.symbols() {
            self.emit_symbol(symbol);
        }
    }

    fn emit_symbol(&mut self, symbol: Symbol) {
        if symbol.is_keyed() {
            self.sink.set_active(true);
        }
        hold(&mut self.delay, self.unit * symbol.duration_units());
        self.sink.set_active(false);

        // Inter-symbol space
        hold(&mut self.delay, self.unit);
    }

    /// Hand back the sink and delay provider
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }
}
