//! Error returned when a message cannot be represented in Morse

/// Why a character was rejected
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reason {
    /// Code point above 255, outside the table's domain
    OutOfRange,
    /// Inside the table's domain but without a Morse representation
    Unmapped,
}

/// A character with no entry in the symbol table
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidCharacterError {
    character: char,
    position: usize,
    reason: Reason,
}

impl InvalidCharacterError {
    pub(crate) const fn new(character: char, reason: Reason) -> Self {
        Self {
            character,
            position: 0,
            reason,
        }
    }

    pub(crate) const fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// The offending character, as it appeared in the input
    pub const fn character(&self) -> char {
        self.character
    }

    /// Index of the character in the message, counted in chars
    ///
    /// Always 0 for single-character lookups.
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn reason(&self) -> Reason {
        self.reason
    }
}

impl core::fmt::Display for InvalidCharacterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.reason {
            Reason::OutOfRange => write!(
                f,
                "character {:?} (U+{:04X}) at position {} is outside the Morse table",
                self.character, self.character as u32, self.position
            ),
            Reason::Unmapped => write!(
                f,
                "character {:?} at position {} has no Morse code",
                self.character, self.position
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCharacterError {}
