//! The letter alphabet shared by field and subsquare characters.
//!
//! One table serves both directions: `letter` maps an index to its letter
//! and `index` maps a letter back to its position in the same array.

use thiserror::Error;

use super::error::GridError;
use super::types::{Axis, Tier};

/// Number of letters in the locator alphabet (`a` through `x`).
pub const SYMBOL_COUNT: u8 = 24;

/// The shared locator alphabet.
pub static SYMBOLS: SymbolTable = SymbolTable {
    letters: [
        'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
        's', 't', 'u', 'v', 'w', 'x',
    ],
};

/// Failure of a single symbol table lookup, before axis/tier context is attached.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolError {
    /// Index is not in `0..24`.
    #[error("number out of bounds: {0}")]
    OutOfRange(i64),

    /// Letter is not in `a..=x`.
    #[error("illegal character: {0:?}")]
    InvalidCharacter(char),
}

impl SymbolError {
    /// Attaches axis and tier context, producing the public error.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Indices are tiny.
    pub fn at(self, axis: Axis, tier: Tier) -> GridError {
        match self {
            Self::OutOfRange(index) => GridError::OutOfRange {
                axis,
                tier,
                value: index as f64,
            },
            Self::InvalidCharacter(character) => GridError::InvalidCharacter {
                axis,
                tier,
                character,
            },
        }
    }
}

/// Bidirectional mapping between lowercase letters `a..=x` and `0..24`.
#[derive(Debug)]
pub struct SymbolTable {
    letters: [char; SYMBOL_COUNT as usize],
}

impl SymbolTable {
    /// Returns the lowercase letter for `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::OutOfRange`] if `index` is not in `0..24`.
    pub fn letter(&self, index: i64) -> Result<char, SymbolError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.letters.get(i).copied())
            .ok_or(SymbolError::OutOfRange(index))
    }

    /// Returns the index of a lowercase `letter`.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidCharacter`] if `letter` is not in `a..=x`.
    pub fn index(&self, letter: char) -> Result<u8, SymbolError> {
        self.letters
            .iter()
            .position(|&c| c == letter)
            .and_then(|i| u8::try_from(i).ok())
            .ok_or(SymbolError::InvalidCharacter(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_consistent_in_both_directions() {
        for index in 0..i64::from(SYMBOL_COUNT) {
            let letter = SYMBOLS.letter(index).unwrap();
            assert_eq!(i64::from(SYMBOLS.index(letter).unwrap()), index);
        }
    }

    #[test]
    fn letter_bounds() {
        assert_eq!(SYMBOLS.letter(0), Ok('a'));
        assert_eq!(SYMBOLS.letter(23), Ok('x'));
        assert_eq!(SYMBOLS.letter(24), Err(SymbolError::OutOfRange(24)));
        assert_eq!(SYMBOLS.letter(-1), Err(SymbolError::OutOfRange(-1)));
    }

    #[test]
    fn index_rejects_letters_outside_alphabet() {
        assert_eq!(SYMBOLS.index('j'), Ok(9));
        assert_eq!(SYMBOLS.index('y'), Err(SymbolError::InvalidCharacter('y')));
        // Lookups are lowercase only; callers normalize first.
        assert_eq!(SYMBOLS.index('A'), Err(SymbolError::InvalidCharacter('A')));
        assert_eq!(SYMBOLS.index('5'), Err(SymbolError::InvalidCharacter('5')));
    }

    #[test]
    fn context_is_attached() {
        let err = SymbolError::OutOfRange(30).at(Axis::Longitude, Tier::Subsquare);
        assert_eq!(
            err,
            GridError::OutOfRange {
                axis: Axis::Longitude,
                tier: Tier::Subsquare,
                value: 30.0,
            }
        );

        let err = SymbolError::InvalidCharacter('!').at(Axis::Latitude, Tier::Field);
        assert_eq!(err.axis(), Some(Axis::Latitude));
        assert_eq!(err.tier(), Some(Tier::Field));
    }
}
