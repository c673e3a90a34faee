// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping absolute pointer positions into surface percentages.

use kurbo::{Point, Rect};

/// The extent of a surface axis in percentage units.
pub const FULL_EXTENT: f64 = 100.0;

/// Clamp behavior for pointer positions that fall outside the drawing surface.
///
/// Pointer capture can keep delivering move events after the pointer has left
/// the surface. This mode decides whether such positions are reported as-is
/// (possibly below `0` or above `100`) or pinned to the nearest edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Report positions outside the surface unchanged.
    ///
    /// A drag released past the right edge produces a rectangle that extends
    /// past `100%`, exactly as the pointer moved.
    #[default]
    PassThrough,
    /// Clamp each axis into `[0, 100]`.
    Clamp,
}

impl ClampMode {
    /// Applies this mode to a percentage pair.
    #[must_use]
    pub fn apply(self, pos: Point) -> Point {
        match self {
            Self::PassThrough => pos,
            Self::Clamp => Point::new(
                pos.x.clamp(0.0, FULL_EXTENT),
                pos.y.clamp(0.0, FULL_EXTENT),
            ),
        }
    }
}

/// Maps an absolute pointer position to percentages of `surface`.
///
/// `pointer` and `surface` must be expressed in the same coordinate space
/// (typically client/device coordinates). The result is `(x%, y%)` measured
/// from the surface's top-left corner.
///
/// Returns `None` when the surface has no usable extent (zero, negative, or
/// non-finite width or height), since no percentage can be derived from it.
///
/// ```
/// use hotspot_geometry::{ClampMode, normalize_position};
/// use kurbo::{Point, Rect};
///
/// let surface = Rect::new(100.0, 50.0, 300.0, 150.0);
/// let pos = normalize_position(Point::new(150.0, 100.0), surface, ClampMode::PassThrough);
/// assert_eq!(pos, Some(Point::new(25.0, 50.0)));
/// ```
#[must_use]
pub fn normalize_position(pointer: Point, surface: Rect, clamp: ClampMode) -> Option<Point> {
    let width = surface.width();
    let height = surface.height();
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return None;
    }
    let offset = pointer - surface.origin();
    let pos = Point::new(
        offset.x / width * FULL_EXTENT,
        offset.y / height * FULL_EXTENT,
    );
    Some(clamp.apply(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Rect {
        Rect::new(10.0, 20.0, 210.0, 420.0)
    }

    #[test]
    fn corners_map_to_zero_and_hundred() {
        let s = surface();
        assert_eq!(
            normalize_position(Point::new(10.0, 20.0), s, ClampMode::PassThrough),
            Some(Point::new(0.0, 0.0))
        );
        assert_eq!(
            normalize_position(Point::new(210.0, 420.0), s, ClampMode::PassThrough),
            Some(Point::new(100.0, 100.0))
        );
    }

    #[test]
    fn pass_through_keeps_out_of_surface_values() {
        let pos = normalize_position(Point::new(310.0, 0.0), surface(), ClampMode::PassThrough)
            .unwrap();
        assert_eq!(pos, Point::new(150.0, -5.0));
    }

    #[test]
    fn clamp_pins_out_of_surface_values() {
        let pos = normalize_position(Point::new(310.0, 0.0), surface(), ClampMode::Clamp).unwrap();
        assert_eq!(pos, Point::new(100.0, 0.0));
    }

    #[test]
    fn degenerate_surface_yields_none() {
        let flat = Rect::new(0.0, 0.0, 100.0, 0.0);
        assert_eq!(
            normalize_position(Point::new(1.0, 1.0), flat, ClampMode::PassThrough),
            None
        );

        let inverted = Rect::new(100.0, 0.0, 0.0, 100.0);
        assert_eq!(
            normalize_position(Point::new(1.0, 1.0), inverted, ClampMode::Clamp),
            None
        );

        let infinite = Rect::new(0.0, 0.0, f64::INFINITY, 10.0);
        assert_eq!(
            normalize_position(Point::new(1.0, 1.0), infinite, ClampMode::PassThrough),
            None
        );
    }

    #[test]
    fn default_mode_is_pass_through() {
        assert_eq!(ClampMode::default(), ClampMode::PassThrough);
    }
}
