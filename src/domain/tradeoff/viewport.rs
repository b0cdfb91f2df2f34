//! Screen layout for a square matrix plot.

use serde::Serialize;

use super::PivotMatrix;
use crate::domain::foundation::{ensure_finite, OptionId, ValidationError};

/// Maps matrix data coordinates to screen pixels and back.
///
/// Screen y grows downward, so data y is inverted: cost 0 sits at the bottom
/// edge of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    left: f64,
    top: f64,
    size: f64,
    axis_max: f64,
}

impl Viewport {
    /// Pointer distance within which an option counts as hit.
    pub const HIT_RADIUS: f64 = 20.0;

    /// Creates a viewport for a plot whose top-left corner is `(left, top)`.
    ///
    /// # Errors
    ///
    /// - `NotFinite` for NaN or infinite arguments
    /// - `OutOfRange` if `size` or `axis_max` is not positive
    pub fn new(left: f64, top: f64, size: f64, axis_max: f64) -> Result<Self, ValidationError> {
        let left = ensure_finite("left", left)?;
        let top = ensure_finite("top", top)?;
        let size = Self::positive("size", size)?;
        let axis_max = Self::positive("axis_max", axis_max)?;
        Ok(Self {
            left,
            top,
            size,
            axis_max,
        })
    }

    fn positive(field: &str, value: f64) -> Result<f64, ValidationError> {
        let value = ensure_finite(field, value)?;
        if value <= 0.0 {
            return Err(ValidationError::out_of_range(field, f64::MIN_POSITIVE, f64::MAX, value));
        }
        Ok(value)
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Screen position of a data point.
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.left + x / self.axis_max * self.size,
            self.top + self.size - y / self.axis_max * self.size,
        )
    }

    /// Data position under a screen point, clamped into the axis range.
    pub fn to_data(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        let x = (screen_x - self.left) / self.size * self.axis_max;
        let y = self.axis_max - (screen_y - self.top) / self.size * self.axis_max;
        (x.clamp(0.0, self.axis_max), y.clamp(0.0, self.axis_max))
    }

    /// First option, in matrix order, within [`Self::HIT_RADIUS`] of the
    /// screen point.
    pub fn option_at(&self, matrix: &PivotMatrix, screen_x: f64, screen_y: f64) -> Option<OptionId> {
        matrix
            .options()
            .iter()
            .find(|o| {
                let (sx, sy) = self.to_screen(o.x(), o.y());
                (sx - screen_x).hypot(sy - screen_y) < Self::HIT_RADIUS
            })
            .map(|o| *o.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(50.0, 60.0, 400.0, 10.0).unwrap()
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert!(Viewport::new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Viewport::new(0.0, 0.0, 100.0, -1.0).is_err());
        assert!(Viewport::new(f64::NAN, 0.0, 100.0, 10.0).is_err());
    }

    #[test]
    fn to_screen_inverts_y() {
        let vp = viewport();
        assert_eq!(vp.to_screen(0.0, 0.0), (50.0, 460.0));
        assert_eq!(vp.to_screen(10.0, 10.0), (450.0, 60.0));
        assert_eq!(vp.to_screen(5.0, 2.5), (250.0, 360.0));
    }

    #[test]
    fn to_data_inverts_to_screen_and_clamps() {
        let vp = viewport();
        assert_eq!(vp.to_data(250.0, 360.0), (5.0, 2.5));
        assert_eq!(vp.to_data(-100.0, 900.0), (0.0, 0.0));
        assert_eq!(vp.to_data(1000.0, 0.0), (10.0, 10.0));
    }

    #[test]
    fn option_at_hits_within_radius() {
        let vp = viewport();
        let matrix = PivotMatrix::default();
        // Rules-Based sits at (5, 2) -> screen (250, 380)
        let hit = vp.option_at(&matrix, 260.0, 385.0).unwrap();
        assert_eq!(matrix.option(&hit).unwrap().name(), "Rules-Based");
        assert!(vp.option_at(&matrix, 250.0, 400.0).is_none());
    }
}
