//! Coordinate to locator encoding.
//!
//! Each axis is resolved once to a whole number of subsquares from the
//! southwest corner of the globe, then split into field, square and
//! subsquare indices. This is the same truncation as repeatedly taking the
//! fractional remainder of each tier, without the error that accumulates
//! when the remainder is rescaled twice.

use log::{debug, trace};

use super::cell::{AxisCell, GridCell, FIELD_COUNT, SQUARE_COUNT, SUBSQUARE_COUNT};
use super::error::Result;
use super::symbol::{SymbolError, SYMBOLS};
use super::types::{Axis, Coordinate, Locator, Precision, Tier};

/// Rounding error, in ulps of the axis span, tolerated below a cell edge.
///
/// Decoded origins land exactly on an edge in theory but a few ulps below it
/// in floating point. Anything further below is floored as usual.
const EDGE_ULPS: f64 = 4.0;

/// Converts a decimal latitude and longitude into a six character locator.
///
/// Latitude 90 and longitude 180 fold into the last cell (`R`, `9`, `x`).
///
/// # Errors
///
/// Returns [`GridError::OutOfRange`](super::GridError::OutOfRange) if either
/// value is outside the globe or not finite.
///
/// # Examples
///
/// ```
/// use gridlocator::encode;
///
/// assert_eq!(encode(0.0, 0.0).unwrap(), "JJ00aa");
/// assert_eq!(encode(38.92, -77.065).unwrap(), "FM18lw");
/// assert!(encode(-91.0, 0.0).is_err());
/// ```
pub fn encode(latitude: f64, longitude: f64) -> Result<String> {
    encode_with_precision(latitude, longitude, Precision::Subsquare)
}

/// Converts a decimal latitude and longitude into a locator of the given precision.
///
/// # Errors
///
/// Returns [`GridError::OutOfRange`](super::GridError::OutOfRange) if either
/// value is outside the globe or not finite.
///
/// # Examples
///
/// ```
/// use gridlocator::{encode_with_precision, Precision};
///
/// let square = encode_with_precision(-34.91, -56.211_67, Precision::Square).unwrap();
/// assert_eq!(square, "GF15");
/// ```
pub fn encode_with_precision(
    latitude: f64,
    longitude: f64,
    precision: Precision,
) -> Result<String> {
    let locator = Coordinate::new(latitude, longitude)
        .and_then(|coordinate| Locator::from_coordinate(coordinate, precision))
        .inspect_err(|err| {
            debug!("event=encode module=locator status=rejected error=\"{err}\"");
        })?;

    trace!("event=encode module=locator status=ok locator={locator}");
    Ok(locator.into())
}

impl GridCell {
    /// Resolves a coordinate to the cell containing it.
    pub(super) fn locate(coordinate: Coordinate, precision: Precision) -> Self {
        let locate = |axis| locate_axis(axis, coordinate.along(axis));
        Self {
            precision: Precision::Subsquare,
            longitude: locate(Axis::Longitude),
            latitude: locate(Axis::Latitude),
        }
        .truncate(precision)
    }

    /// Renders the canonical locator string.
    pub(super) fn render(&self) -> Result<String> {
        const AXES: [Axis; 2] = [Axis::Longitude, Axis::Latitude];

        let mut code = String::with_capacity(self.precision.len());
        for axis in AXES {
            code.push(field_letter(axis, self.axis(axis).field)?);
        }
        for axis in AXES {
            code.push(square_digit(axis, self.axis(axis).square)?);
        }
        if self.precision == Precision::Subsquare {
            for axis in AXES {
                code.push(subsquare_letter(axis, self.axis(axis).subsquare)?);
            }
        }
        Ok(code)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)] // Bounded by the globe.
fn locate_axis(axis: Axis, degrees: f64) -> AxisCell {
    let per_field = SQUARE_COUNT * SUBSQUARE_COUNT;
    let span = FIELD_COUNT * per_field;
    let snap = span as f64 * EDGE_ULPS * f64::EPSILON;

    let shifted = (degrees + axis.offset()) * axis.subsquares_per_degree();
    // The closed upper edge (90°N, 180°E) belongs to the last cell.
    let units = ((shifted + snap).floor() as i64).min(span - 1);

    AxisCell {
        field: units / per_field,
        square: units % per_field / SUBSQUARE_COUNT,
        subsquare: units % SUBSQUARE_COUNT,
    }
}

fn field_letter(axis: Axis, index: i64) -> Result<char> {
    if !(0..FIELD_COUNT).contains(&index) {
        return Err(SymbolError::OutOfRange(index).at(axis, Tier::Field));
    }
    SYMBOLS
        .letter(index)
        .map(|letter| letter.to_ascii_uppercase())
        .map_err(|err| err.at(axis, Tier::Field))
}

fn square_digit(axis: Axis, index: i64) -> Result<char> {
    u32::try_from(index)
        .ok()
        .and_then(|digit| char::from_digit(digit, 10))
        .ok_or_else(|| SymbolError::OutOfRange(index).at(axis, Tier::Square))
}

fn subsquare_letter(axis: Axis, index: i64) -> Result<char> {
    SYMBOLS
        .letter(index)
        .map_err(|err| err.at(axis, Tier::Subsquare))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::GridError;

    #[test]
    fn encode_origin_of_both_axes() {
        assert_eq!(encode(0.0, 0.0).unwrap(), "JJ00aa");
    }

    #[test]
    fn encode_reference_locations() {
        assert_eq!(
            encode(48.146_666_666_666_67, 11.608_333_333_333_33).unwrap(),
            "JN58td"
        );
        assert_eq!(encode(-34.91, -56.211_666_666_666_67).unwrap(), "GF15vc");
        assert_eq!(encode(38.92, -77.065).unwrap(), "FM18lw");
        assert_eq!(encode(-41.283_333_333_333_33, 174.745).unwrap(), "RE78ir");
    }

    #[test]
    fn encode_southwest_corner_of_globe() {
        assert_eq!(encode(-90.0, -180.0).unwrap(), "AA00aa");
    }

    #[test]
    fn encode_upper_edges_fold_into_last_cell() {
        assert_eq!(encode(90.0, 180.0).unwrap(), "RR99xx");
        assert_eq!(encode(90.0, 0.0).unwrap(), "JR09ax");
        assert_eq!(encode(0.0, 180.0).unwrap(), "RJ90xa");
    }

    #[test]
    fn encode_square_precision_is_prefix() {
        let full = encode(38.92, -77.065).unwrap();
        let square = encode_with_precision(38.92, -77.065, Precision::Square).unwrap();
        assert_eq!(square, "FM18");
        assert!(full.starts_with(&square));
    }

    #[test]
    fn encode_rejects_out_of_range_latitude() {
        let err = encode(90.000_1, 0.0).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRange {
                axis: Axis::Latitude,
                tier: Tier::Field,
                value: 90.000_1,
            }
        );
    }

    #[test]
    fn encode_rejects_out_of_range_longitude() {
        let err = encode(0.0, 181.0).unwrap_err();
        assert_eq!(err.axis(), Some(Axis::Longitude));
        assert_eq!(err.tier(), Some(Tier::Field));
    }

    #[test]
    fn encode_rejects_nan() {
        assert!(matches!(
            encode(f64::NAN, 0.0),
            Err(GridError::OutOfRange {
                axis: Axis::Latitude,
                ..
            })
        ));
        assert!(matches!(
            encode(0.0, f64::NAN),
            Err(GridError::OutOfRange {
                axis: Axis::Longitude,
                ..
            })
        ));
    }

    fn null_island() -> GridCell {
        GridCell::locate(Coordinate::new(0.0, 0.0).unwrap(), Precision::Subsquare)
    }

    #[test]
    fn render_reports_failing_tier() {
        let mut cell = null_island();
        cell.latitude.field = 18;
        assert_eq!(
            cell.render().unwrap_err(),
            GridError::OutOfRange {
                axis: Axis::Latitude,
                tier: Tier::Field,
                value: 18.0,
            }
        );

        let mut cell = null_island();
        cell.longitude.square = 10;
        let err = cell.render().unwrap_err();
        assert_eq!(err.axis(), Some(Axis::Longitude));
        assert_eq!(err.tier(), Some(Tier::Square));

        let mut cell = null_island();
        cell.longitude.subsquare = 24;
        let err = cell.render().unwrap_err();
        assert_eq!(err.tier(), Some(Tier::Subsquare));
    }

    #[test]
    fn every_cell_origin_locates_to_its_own_cell() {
        let per_field = SQUARE_COUNT * SUBSQUARE_COUNT;
        for units in 0..FIELD_COUNT * per_field {
            let axis = AxisCell {
                field: units / per_field,
                square: units % per_field / SUBSQUARE_COUNT,
                subsquare: units % SUBSQUARE_COUNT,
            };
            let cell = GridCell {
                precision: Precision::Subsquare,
                longitude: axis,
                latitude: axis,
            };
            let (lat, lon) = cell.origin();
            let origin = Coordinate::new(lat, lon).unwrap();
            assert_eq!(
                GridCell::locate(origin, Precision::Subsquare),
                cell,
                "units {units}"
            );
        }
    }

    #[test]
    fn values_just_below_an_edge_are_floored() {
        // 1e-12° south-west of null island is still field I, square 9, subsquare x.
        assert_eq!(encode(-1e-12, -1e-12).unwrap(), "II99xx");
        assert_eq!(encode(-1e-12, 0.0).unwrap(), "JI09ax");

        // Just below the JJ00ab/JJ00ac latitude edge stays in b.
        assert_eq!(encode(2.0 / 24.0 - 1e-12, 0.0).unwrap(), "JJ00ab");
        assert_eq!(encode(2.0 / 24.0, 0.0).unwrap(), "JJ00ac");
    }
}
