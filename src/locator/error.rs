//! Error types for locator encoding and decoding.
//!
//! Every error carries the axis and tier that produced it, so callers can
//! match on structure instead of message text.

use thiserror::Error;

use super::types::{Axis, Tier};

/// Error type for locator operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// A coordinate, or a grid index derived from it, fell outside the legal window.
    #[error("{tier} {axis} out of range: {value}")]
    OutOfRange {
        /// Axis that failed.
        axis: Axis,
        /// Tier that failed.
        tier: Tier,
        /// The offending coordinate or index.
        value: f64,
    },

    /// Locator is neither 4 nor 6 characters long.
    #[error("Grid locator must be 4 or 6 characters, got {0}")]
    InvalidLength(usize),

    /// A locator character is not valid at its position.
    #[error("Invalid {tier} {axis} character: {character:?}")]
    InvalidCharacter {
        /// Axis that failed.
        axis: Axis,
        /// Tier that failed.
        tier: Tier,
        /// The rejected character.
        character: char,
    },
}

impl GridError {
    /// Returns the axis this error is tagged with, if any.
    #[must_use]
    pub const fn axis(&self) -> Option<Axis> {
        match self {
            Self::OutOfRange { axis, .. } | Self::InvalidCharacter { axis, .. } => Some(*axis),
            Self::InvalidLength(_) => None,
        }
    }

    /// Returns the tier this error is tagged with, if any.
    #[must_use]
    pub const fn tier(&self) -> Option<Tier> {
        match self {
            Self::OutOfRange { tier, .. } | Self::InvalidCharacter { tier, .. } => Some(*tier),
            Self::InvalidLength(_) => None,
        }
    }
}

/// Result type alias for locator operations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_error_display() {
        let err = GridError::OutOfRange {
            axis: Axis::Latitude,
            tier: Tier::Field,
            value: 91.0,
        };
        assert_eq!(err.to_string(), "field latitude out of range: 91");
    }

    #[test]
    fn invalid_length_error_display() {
        let err = GridError::InvalidLength(5);
        assert_eq!(
            err.to_string(),
            "Grid locator must be 4 or 6 characters, got 5"
        );
    }

    #[test]
    fn invalid_character_error_display() {
        let err = GridError::InvalidCharacter {
            axis: Axis::Latitude,
            tier: Tier::Square,
            character: '!',
        };
        assert_eq!(err.to_string(), "Invalid square latitude character: '!'");
    }

    #[test]
    fn context_accessors() {
        let err = GridError::InvalidCharacter {
            axis: Axis::Longitude,
            tier: Tier::Subsquare,
            character: 'z',
        };
        assert_eq!(err.axis(), Some(Axis::Longitude));
        assert_eq!(err.tier(), Some(Tier::Subsquare));

        let err = GridError::InvalidLength(3);
        assert_eq!(err.axis(), None);
        assert_eq!(err.tier(), None);
    }
}
