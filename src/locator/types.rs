//! Locator data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::GridCell;
use super::error::{GridError, Result};

/// Coordinate axis a locator character describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// East-west position, encoded first in each character pair.
    Longitude,
    /// North-south position, encoded second in each character pair.
    Latitude,
}

impl Axis {
    /// Shift that moves this axis onto a non-negative range.
    #[must_use]
    pub const fn offset(self) -> f64 {
        match self {
            Self::Longitude => 180.0,
            Self::Latitude => 90.0,
        }
    }

    /// Width of a field along this axis, in degrees.
    #[must_use]
    pub const fn field_span(self) -> f64 {
        match self {
            Self::Longitude => 20.0,
            Self::Latitude => 10.0,
        }
    }

    /// Width of a square along this axis, in degrees.
    #[must_use]
    pub const fn square_span(self) -> f64 {
        match self {
            Self::Longitude => 2.0,
            Self::Latitude => 1.0,
        }
    }

    /// Number of subsquares per degree along this axis.
    #[must_use]
    pub const fn subsquares_per_degree(self) -> f64 {
        match self {
            Self::Longitude => 12.0,
            Self::Latitude => 24.0,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Longitude => f.write_str("longitude"),
            Self::Latitude => f.write_str("latitude"),
        }
    }
}

/// Nesting level of a locator character pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 20°×10° cell, letters `A`-`R`.
    Field,
    /// 2°×1° cell, digits `0`-`9`.
    Square,
    /// 5'×2.5' cell, letters `a`-`x`.
    Subsquare,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => f.write_str("field"),
            Self::Square => f.write_str("square"),
            Self::Subsquare => f.write_str("subsquare"),
        }
    }
}

/// Resolution of a locator.
///
/// | Precision | Characters | Cell size (lat × lon) |
/// |-----------|------------|-----------------------|
/// | Square    | 4          | 1° × 2°               |
/// | Subsquare | 6          | 2.5' × 5'             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Field and square, e.g. `JN58`.
    Square,
    /// Field, square and subsquare, e.g. `JN58td`.
    #[default]
    Subsquare,
}

impl Precision {
    /// Returns the number of characters a locator of this precision has.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Square => 4,
            Self::Subsquare => 6,
        }
    }

    /// Returns the precision matching a locator length, if any.
    #[must_use]
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            4 => Some(Self::Square),
            6 => Some(Self::Subsquare),
            _ => None,
        }
    }

    /// Returns the size of one cell as `(latitude, longitude)` degrees.
    #[must_use]
    pub fn cell_size(self) -> (f64, f64) {
        match self {
            Self::Square => (
                Axis::Latitude.square_span(),
                Axis::Longitude.square_span(),
            ),
            Self::Subsquare => (
                1.0 / Axis::Latitude.subsquares_per_degree(),
                1.0 / Axis::Longitude.subsquares_per_degree(),
            ),
        }
    }
}

/// A validated geographic position in decimal degrees.
///
/// # Example
///
/// ```
/// use gridlocator::{Axis, Coordinate};
///
/// let munich = Coordinate::new(48.146_67, 11.608_33).unwrap();
/// assert_eq!(munich.latitude(), 48.146_67);
///
/// let err = Coordinate::new(91.0, 0.0).unwrap_err();
/// assert_eq!(err.axis(), Some(Axis::Latitude));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    pub(super) latitude: f64,
    pub(super) longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting anything outside
    /// latitude `[-90, 90]` and longitude `[-180, 180]`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] tagged with the failing axis for
    /// out-of-range or non-finite input.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_axis(Axis::Latitude, latitude)?;
        check_axis(Axis::Longitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Value along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Longitude => self.longitude,
            Axis::Latitude => self.latitude,
        }
    }
}

fn check_axis(axis: Axis, value: f64) -> Result<()> {
    let limit = axis.offset();
    if (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(GridError::OutOfRange {
            axis,
            tier: Tier::Field,
            value,
        })
    }
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GridError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

/// A validated Maidenhead locator in canonical case.
///
/// Field letters are uppercase and subsquare letters lowercase, whatever
/// case the locator was parsed from.
///
/// # Example
///
/// ```
/// use gridlocator::{Locator, Precision};
///
/// let locator: Locator = "jn58TD".parse().unwrap();
/// assert_eq!(locator.as_str(), "JN58td");
/// assert_eq!(locator.precision(), Precision::Subsquare);
///
/// let origin = locator.origin();
/// assert!((origin.latitude() - 48.125).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locator {
    code: String,
    cell: GridCell,
}

impl Locator {
    /// Parses a 4- or 6-character locator, case-insensitively.
    ///
    /// Unlike [`decode`](super::decode), only fields `A`-`R` are accepted,
    /// so every `Locator` names a cell on the globe.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidLength`] or [`GridError::InvalidCharacter`]
    /// for malformed input, and [`GridError::OutOfRange`] for fields `S`-`X`.
    pub fn parse(locator: &str) -> Result<Self> {
        GridCell::parse(locator).and_then(Self::from_cell)
    }

    /// Encodes `coordinate` at the given precision.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if a grid index cannot be rendered.
    pub fn from_coordinate(coordinate: Coordinate, precision: Precision) -> Result<Self> {
        Self::from_cell(GridCell::locate(coordinate, precision))
    }

    fn from_cell(cell: GridCell) -> Result<Self> {
        let code = cell.render()?;
        Ok(Self { code, cell })
    }

    /// Canonical locator string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Resolution of this locator.
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.cell.precision
    }

    /// Southwest corner of the cell.
    #[must_use]
    pub fn origin(&self) -> Coordinate {
        let (latitude, longitude) = self.cell.origin();
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Centroid of the cell.
    ///
    /// ```
    /// use gridlocator::Locator;
    ///
    /// let center = Locator::parse("JJ00").unwrap().center();
    /// assert_eq!(center.latitude(), 0.5);
    /// assert_eq!(center.longitude(), 1.0);
    /// ```
    #[must_use]
    pub fn center(&self) -> Coordinate {
        let origin = self.origin();
        let (height, width) = self.cell_size();
        Coordinate {
            latitude: origin.latitude + height / 2.0,
            longitude: origin.longitude + width / 2.0,
        }
    }

    /// Size of the cell as `(latitude, longitude)` degrees.
    #[must_use]
    pub fn cell_size(&self) -> (f64, f64) {
        self.precision().cell_size()
    }

    /// Returns whether `coordinate` encodes to this locator.
    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        GridCell::locate(*coordinate, self.precision()) == self.cell
    }

    /// Returns the 4-character locator of the enclosing square.
    #[must_use]
    pub fn square(&self) -> Self {
        let cell = self.cell.truncate(Precision::Square);
        let code = self.code[..Precision::Square.len()].to_string();
        Self { code, cell }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Locator {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locator {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        locator.code
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

/// Settings for locator encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocatorSettings {
    /// Resolution of produced locators.
    pub precision: Precision,
}

impl LocatorSettings {
    /// Encodes a coordinate pair using these settings.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] for coordinates outside the globe.
    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<Locator> {
        Locator::from_coordinate(Coordinate::new(latitude, longitude)?, self.precision)
    }
}
