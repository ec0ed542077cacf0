//! Message validation and symbolic rendering

use core::fmt::Write;

use crate::error::InvalidCharacterError;
use crate::table::SYMBOL_TABLE;
use crate::types::CharacterCode;

/// A message whose every character is known to have a Morse code
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Encoded<'a> {
    message: &'a str,
}

/// Validate a whole message against the symbol table
///
/// Fails on the first character without a code; nothing else is inspected
/// after that point.
pub fn encode(message: &str) -> Result<Encoded<'_>, InvalidCharacterError> {
    for (position, character) in message.chars().enumerate() {
        SYMBOL_TABLE
            .lookup(character)
            .map_err(|err| err.at(position))?;
    }
    Ok(Encoded { message })
}

impl<'a> Encoded<'a> {
    /// The validated source text
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// Per-character codes, in input order
    pub fn codes(&self) -> impl Iterator<Item = CharacterCode> + 'a {
        // Every character was checked in `encode`, so nothing is dropped here
        self.message.chars().filter_map(|c| SYMBOL_TABLE.get(c))
    }

    /// Number of symbols across all characters
    pub fn symbol_count(&self) -> usize {
        self.codes().map(|code| code.len()).sum()
    }

    /// Total line time in units, including the gap after every symbol
    pub fn units(&self) -> u64 {
        self.codes().map(|code| code.units() as u64).sum()
    }

    /// Render into a fixed-capacity string
    pub fn render<const N: usize>(&self) -> Result<heapless::String<N>, core::fmt::Error> {
        let mut out = heapless::String::new();
        write!(out, "{}", self)?;
        Ok(out)
    }
}

impl core::fmt::Display for Encoded<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, code) in self.codes().enumerate() {
            if index > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}
