//! Character to Morse symbol table

use crate::error::{InvalidCharacterError, Reason};
use crate::types::{CharacterCode, Symbol};
use crate::types::Symbol::{Dash, Dot, Gap};

/// Fixed mapping from the 0-255 code point range to Morse codes
///
/// Every slot holds either a code or `None`; there is no mutation after
/// construction, so the table is shared without synchronization.
pub struct SymbolTable {
    entries: [Option<CharacterCode>; 256],
}

/// The process-wide table
pub static SYMBOL_TABLE: SymbolTable = SymbolTable::new();

const fn code(symbols: &'static [Symbol]) -> Option<CharacterCode> {
    Some(CharacterCode::new(symbols))
}

impl SymbolTable {
    const fn new() -> Self {
        let mut entries: [Option<CharacterCode>; 256] = [None; 256];

        entries[b' ' as usize] = code(&[Gap]);

        entries[b'A' as usize] = code(&[Dot, Dash]);
        entries[b'B' as usize] = code(&[Dash, Dot, Dot, Dot]);
        entries[b'C' as usize] = code(&[Dash, Dot, Dash, Dot]);
        entries[b'D' as usize] = code(&[Dash, Dot, Dot]);
        entries[b'E' as usize] = code(&[Dot]);
        entries[b'F' as usize] = code(&[Dot, Dot, Dash, Dot]);
        entries[b'G' as usize] = code(&[Dash, Dash, Dot]);
        entries[b'H' as usize] = code(&[Dot, Dot, Dot, Dot]);
        entries[b'I' as usize] = code(&[Dot, Dot]);
        entries[b'J' as usize] = code(&[Dot, Dash, Dash, Dash]);
        entries[b'K' as usize] = code(&[Dash, Dot, Dash]);
        entries[b'L' as usize] = code(&[Dot, Dash, Dot, Dot]);
        entries[b'M' as usize] = code(&[Dash, Dash]);
        entries[b'N' as usize] = code(&[Dash, Dot]);
        entries[b'O' as usize] = code(&[Dash, Dash, Dash]);
        entries[b'P' as usize] = code(&[Dot, Dash, Dash, Dot]);
        entries[b'Q' as usize] = code(&[Dash, Dash, Dot, Dash]);
        entries[b'R' as usize] = code(&[Dot, Dash, Dot]);
        entries[b'S' as usize] = code(&[Dot, Dot, Dot]);
        entries[b'T' as usize] = code(&[Dash]);
        entries[b'U' as usize] = code(&[Dot, Dot, Dash]);
        entries[b'V' as usize] = code(&[Dot, Dot, Dot, Dash]);
        entries[b'W' as usize] = code(&[Dot, Dash, Dash]);
        entries[b'X' as usize] = code(&[Dash, Dot, Dot, Dash]);
        entries[b'Y' as usize] = code(&[Dash, Dot, Dash, Dash]);
        entries[b'Z' as usize] = code(&[Dash, Dash, Dot, Dot]);

        entries[b'0' as usize] = code(&[Dash, Dash, Dash, Dash, Dash]);
        entries[b'1' as usize] = code(&[Dot, Dash, Dash, Dash, Dash]);
        entries[b'2' as usize] = code(&[Dot, Dot, Dash, Dash, Dash]);
        entries[b'3' as usize] = code(&[Dot, Dot, Dot, Dash, Dash]);
        entries[b'4' as usize] = code(&[Dot, Dot, Dot, Dot, Dash]);
        entries[b'5' as usize] = code(&[Dot, Dot, Dot, Dot, Dot]);
        entries[b'6' as usize] = code(&[Dash, Dot, Dot, Dot, Dot]);
        entries[b'7' as usize] = code(&[Dash, Dash, Dot, Dot, Dot]);
        entries[b'8' as usize] = code(&[Dash, Dash, Dash, Dot, Dot]);
        entries[b'9' as usize] = code(&[Dash, Dash, Dash, Dash, Dot]);

        entries[b'.' as usize] = code(&[Dot, Dash, Dot, Dash, Dot, Dash]);
        entries[b',' as usize] = code(&[Dash, Dash, Dot, Dot, Dash, Dash]);
        entries[b'?' as usize] = code(&[Dot, Dot, Dash, Dash, Dot, Dot]);
        entries[b'"' as usize] = code(&[Dot, Dash, Dot, Dot, Dash, Dot]);
        entries[b'/' as usize] = code(&[Dash, Dot, Dot, Dash, Dot]);

        Self { entries }
    }

    /// Look up a character, folding ASCII lowercase to uppercase
    ///
    /// Returns `None` both for unmapped bytes and for code points above 255.
    pub fn get(&self, character: char) -> Option<CharacterCode> {
        self.lookup(character).ok()
    }

    /// Look up a character and report why it failed
    pub fn lookup(&self, character: char) -> Result<CharacterCode, InvalidCharacterError> {
        let index = character as u32;
        if index > 0xFF {
            return Err(InvalidCharacterError::new(character, Reason::OutOfRange));
        }
        let folded = (index as u8).to_ascii_uppercase();
        self.entries[folded as usize]
            .ok_or(InvalidCharacterError::new(character, Reason::Unmapped))
    }

    /// Returns true if the character has a Morse representation
    pub fn contains(&self, character: char) -> bool {
        self.get(character).is_some()
    }

    /// All mapped characters with their codes, in code point order
    pub fn iter(&self) -> impl Iterator<Item = (char, CharacterCode)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.map(|code| (index as u8 as char, code)))
    }
}

/// Morse code of a single character
pub fn letter_code(character: char) -> Result<CharacterCode, InvalidCharacterError> {
    SYMBOL_TABLE.lookup(character)
}
