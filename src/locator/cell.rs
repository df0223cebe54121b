//! Grid indices shared by the encoder and decoder.

use super::symbol::SYMBOL_COUNT;
use super::types::{Axis, Precision};

/// Fields per axis (`A` through `R`).
pub(super) const FIELD_COUNT: i64 = 18;

/// Squares per field along each axis.
pub(super) const SQUARE_COUNT: i64 = 10;

/// Subsquares per square along each axis.
pub(super) const SUBSQUARE_COUNT: i64 = SYMBOL_COUNT as i64;

/// Tier indices along one axis.
///
/// Indices are signed so that a value outside its window can still be
/// reported when rendering fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(super) struct AxisCell {
    pub(super) field: i64,
    pub(super) square: i64,
    pub(super) subsquare: i64,
}

impl AxisCell {
    /// Southwest edge of the cell along `axis`, in degrees.
    #[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
    fn origin(self, axis: Axis) -> f64 {
        self.field as f64 * axis.field_span()
            + self.square as f64 * axis.square_span()
            + self.subsquare as f64 / axis.subsquares_per_degree()
            - axis.offset()
    }
}

/// A resolved locator cell: both axes plus the precision they are valid to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct GridCell {
    pub(super) precision: Precision,
    pub(super) longitude: AxisCell,
    pub(super) latitude: AxisCell,
}

impl GridCell {
    pub(super) const fn axis(&self, axis: Axis) -> &AxisCell {
        match axis {
            Axis::Longitude => &self.longitude,
            Axis::Latitude => &self.latitude,
        }
    }

    pub(super) fn axis_mut(&mut self, axis: Axis) -> &mut AxisCell {
        match axis {
            Axis::Longitude => &mut self.longitude,
            Axis::Latitude => &mut self.latitude,
        }
    }

    /// Southwest corner of the cell as `(latitude, longitude)`.
    ///
    /// Fields `S`-`X` produce values beyond the globe.
    pub(super) fn origin(&self) -> (f64, f64) {
        (
            self.latitude.origin(Axis::Latitude),
            self.longitude.origin(Axis::Longitude),
        )
    }

    /// Drops any tier finer than `precision`.
    pub(super) const fn truncate(mut self, precision: Precision) -> Self {
        if matches!(precision, Precision::Square) {
            self.longitude.subsquare = 0;
            self.latitude.subsquare = 0;
        }
        self.precision = precision;
        self
    }
}
