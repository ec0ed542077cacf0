//! Core data types for the Morse transmitter

use crate::hal::Duration;

/// Morse code symbols
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Dit (short mark)
    Dot,
    /// Dah (long mark)
    Dash,
    /// Unkeyed slot, used for the space between words
    Gap,
}

impl Symbol {
    /// Returns how long this symbol holds the line, in units
    ///
    /// The one-unit gap that follows every symbol is not included.
    pub const fn duration_units(&self) -> u32 {
        match self {
            Symbol::Dot => 1,
            Symbol::Dash => 3,
            Symbol::Gap => 6,
        }
    }

    /// Returns true if this symbol drives the line active
    pub const fn is_keyed(&self) -> bool {
        match self {
            Symbol::Dot | Symbol::Dash => true,
            Symbol::Gap => false,
        }
    }

    /// Printable form: `*` dot, `-` dash, space for a gap
    pub const fn as_char(&self) -> char {
        match self {
            Symbol::Dot => '*',
            Symbol::Dash => '-',
            Symbol::Gap => ' ',
        }
    }
}

/// The symbol sequence of one character
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharacterCode(&'static [Symbol]);

impl CharacterCode {
    pub(crate) const fn new(symbols: &'static [Symbol]) -> Self {
        Self(symbols)
    }

    pub const fn symbols(&self) -> &'static [Symbol] {
        self.0
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Line time taken by this character, inter-symbol gaps included
    pub fn units(&self) -> u32 {
        self.0.iter().map(|s| s.duration_units() + 1).sum()
    }
}

impl core::fmt::Display for CharacterCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use core::fmt::Write;
        for symbol in self.0 {
            f.write_char(symbol.as_char())?;
        }
        Ok(())
    }
}

/// Longest accepted unit, in microseconds
///
/// The space character holds the line for 6 units plus the 1-unit gap, so
/// any longer unit could not be scaled without overflowing.
pub const MAX_UNIT_MICROS: u64 = u64::MAX / 7;

/// Transmitter configuration parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransmitterConfig {
    /// Basic timing unit (dot duration)
    pub unit: Duration,
}

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self {
            unit: Duration::from_millis(60), // 20 WPM
        }
    }
}

impl TransmitterConfig {
    /// Create a configuration from a speed in words per minute
    pub fn from_wpm(wpm: u32) -> Result<Self, &'static str> {
        if wpm == 0 || wpm > 100 {
            return Err("WPM must be between 1 and 100");
        }

        // PARIS standard: 50 units per word, so unit = 1200ms / wpm
        let unit = Duration::from_micros(1_200_000 / wpm as u64);

        Ok(Self { unit })
    }

    /// Create a configuration from an explicit unit duration
    pub fn from_unit(unit: Duration) -> Result<Self, &'static str> {
        if unit.as_micros() == 0 {
            return Err("Unit duration must be greater than zero");
        }
        if unit.as_micros() > MAX_UNIT_MICROS {
            return Err("Unit duration is too long");
        }
        Ok(Self { unit })
    }

    /// Get Words Per Minute from current unit timing
    pub fn wpm(&self) -> u32 {
        let micros = self.unit.as_micros().max(1);
        ((1_200_000 / micros) as u32).max(1)
    }

    /// Dot mark duration
    pub fn dot(&self) -> Duration {
        self.unit
    }

    /// Dash mark duration
    pub fn dash(&self) -> Duration {
        self.unit * Symbol::Dash.duration_units()
    }

    /// Hold time of the space character
    pub fn word_gap(&self) -> Duration {
        self.unit * Symbol::Gap.duration_units()
    }

    /// Pause after every symbol
    pub fn symbol_gap(&self) -> Duration {
        self.unit
    }
}
