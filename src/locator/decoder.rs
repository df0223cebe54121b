//! Locator to coordinate decoding.

use log::{debug, trace};

use super::cell::{AxisCell, GridCell};
use super::error::{GridError, Result};
use super::symbol::SYMBOLS;
use super::types::{Axis, Precision, Tier};

/// Converts a 4 or 6 character locator into `(latitude, longitude)`.
///
/// The result is the southwest corner of the locator's cell, not its
/// centroid. Use [`Locator::center`](super::Locator::center) for the
/// midpoint. Letters are accepted in either case. Field letters decode
/// through the full `a`-`x` alphabet, so `S`-`X` yield values past 90°N or
/// 180°E.
///
/// # Errors
///
/// - [`GridError::InvalidLength`] if the locator is not 4 or 6 characters.
/// - [`GridError::InvalidCharacter`] if a character does not belong at its
///   position.
///
/// # Examples
///
/// ```
/// use gridlocator::decode;
///
/// let (lat, lon) = decode("JN58td").unwrap();
/// assert!((lat - 48.146_67).abs() < 0.1);
/// assert!((lon - 11.608_33).abs() < 0.1);
///
/// assert_eq!(decode("jj00aa").unwrap(), decode("JJ00AA").unwrap());
/// ```
pub fn decode(locator: &str) -> Result<(f64, f64)> {
    let (latitude, longitude) = GridCell::parse(locator)?.origin();
    trace!(
        "event=decode module=locator status=ok locator={locator} latitude={latitude} longitude={longitude}"
    );
    Ok((latitude, longitude))
}

impl GridCell {
    /// Parses and validates a locator, case-insensitively.
    pub(super) fn parse(locator: &str) -> Result<Self> {
        Self::parse_chars(locator).inspect_err(|err| {
            debug!("event=decode module=locator status=rejected error=\"{err}\"");
        })
    }

    fn parse_chars(locator: &str) -> Result<Self> {
        let chars: Vec<char> = locator.chars().collect();
        let precision =
            Precision::from_len(chars.len()).ok_or(GridError::InvalidLength(chars.len()))?;

        let mut cell = Self {
            precision,
            longitude: AxisCell::default(),
            latitude: AxisCell::default(),
        };

        for (offset, axis) in [Axis::Longitude, Axis::Latitude].into_iter().enumerate() {
            let slot = cell.axis_mut(axis);
            slot.field = field_index(axis, chars[offset])?;
            slot.square = square_index(axis, chars[offset + 2])?;
            if precision == Precision::Subsquare {
                slot.subsquare = subsquare_index(axis, chars[offset + 4])?;
            }
        }

        Ok(cell)
    }
}

fn field_index(axis: Axis, character: char) -> Result<i64> {
    SYMBOLS
        .index(character.to_ascii_lowercase())
        .map(i64::from)
        .map_err(|_| GridError::InvalidCharacter {
            axis,
            tier: Tier::Field,
            character,
        })
}

fn square_index(axis: Axis, character: char) -> Result<i64> {
    character
        .to_digit(10)
        .map(i64::from)
        .ok_or(GridError::InvalidCharacter {
            axis,
            tier: Tier::Square,
            character,
        })
}

fn subsquare_index(axis: Axis, character: char) -> Result<i64> {
    SYMBOLS
        .index(character.to_ascii_lowercase())
        .map(i64::from)
        .map_err(|_| GridError::InvalidCharacter {
            axis,
            tier: Tier::Subsquare,
            character,
        })
}
