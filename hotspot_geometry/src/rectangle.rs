// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner-anchored percentage rectangles.

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect};

use crate::position::FULL_EXTENT;

/// The horizontal edge a [`Rectangle`] is pinned to.
///
/// The value is the distance in percent from that edge of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HorizontalAnchor {
    /// Pinned at this distance from the surface's left edge.
    Left(f64),
    /// Pinned at this distance from the surface's right edge.
    Right(f64),
}

/// The vertical edge a [`Rectangle`] is pinned to.
///
/// The value is the distance in percent from that edge of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalAnchor {
    /// Pinned at this distance from the surface's top edge.
    Top(f64),
    /// Pinned at this distance from the surface's bottom edge.
    Bottom(f64),
}

/// Position of the current pointer relative to the drag anchor.
///
/// ```text
///  -------------
///  |  0  |  1  |
///  -------------
///  |  3  |  2  |
///  -------------
/// ```
///
/// Each axis is compared independently: a coordinate strictly less than the
/// anchor is "before", anything else (including equality) is "after".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Up and to the left of the anchor (0).
    BeforeBoth,
    /// Up and to the right of the anchor (1).
    AfterXBeforeY,
    /// Down and to the right of the anchor, or exactly on it (2).
    AfterBoth,
    /// Down and to the left of the anchor (3).
    BeforeXAfterY,
}

impl Quadrant {
    /// Classifies `current` relative to `anchor`.
    #[must_use]
    pub fn of(current: Point, anchor: Point) -> Self {
        match (current.x < anchor.x, current.y < anchor.y) {
            (true, true) => Self::BeforeBoth,
            (false, true) => Self::AfterXBeforeY,
            (false, false) => Self::AfterBoth,
            (true, false) => Self::BeforeXAfterY,
        }
    }

    /// Returns the edges that keep `anchor` fixed while the box grows toward
    /// this quadrant.
    #[must_use]
    pub fn anchors(self, anchor: Point) -> (HorizontalAnchor, VerticalAnchor) {
        let left = HorizontalAnchor::Left(anchor.x);
        let right = HorizontalAnchor::Right(FULL_EXTENT - anchor.x);
        let top = VerticalAnchor::Top(anchor.y);
        let bottom = VerticalAnchor::Bottom(FULL_EXTENT - anchor.y);
        match self {
            Self::BeforeBoth => (right, bottom),
            Self::AfterXBeforeY => (left, bottom),
            Self::AfterBoth => (left, top),
            Self::BeforeXAfterY => (right, top),
        }
    }
}

/// A rectangle in surface percentages, pinned to one horizontal and one
/// vertical edge.
///
/// Pinning the edge nearest the press point lets an overlay grow away from
/// where the drag started no matter which direction the pointer travels.
/// Exactly one anchor per axis exists by construction.
///
/// ```
/// use hotspot_geometry::Rectangle;
/// use kurbo::Point;
///
/// let rect = Rectangle::from_drag(Point::new(20.0, 30.0), Point::new(60.0, 10.0));
/// assert_eq!(rect.left(), Some(20.0));
/// assert_eq!(rect.bottom(), Some(70.0));
/// assert_eq!(rect.right(), None);
/// assert_eq!(rect.top(), None);
/// assert_eq!(rect.width(), 40.0);
/// assert_eq!(rect.height(), 20.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
    horizontal: HorizontalAnchor,
    vertical: VerticalAnchor,
}

impl Rectangle {
    /// Creates a rectangle from explicit dimensions and anchors.
    ///
    /// Negative extents are folded to their magnitude.
    #[must_use]
    pub fn new(
        width: f64,
        height: f64,
        horizontal: HorizontalAnchor,
        vertical: VerticalAnchor,
    ) -> Self {
        Self {
            width: width.abs(),
            height: height.abs(),
            horizontal,
            vertical,
        }
    }

    /// Derives the rectangle spanned by a drag from `anchor` to `current`.
    ///
    /// Both points are in surface percentages. The result is recomputed from
    /// scratch on every call; no state is carried between moves.
    #[must_use]
    pub fn from_drag(anchor: Point, current: Point) -> Self {
        let (horizontal, vertical) = Quadrant::of(current, anchor).anchors(anchor);
        Self::new(
            anchor.x - current.x,
            anchor.y - current.y,
            horizontal,
            vertical,
        )
    }

    /// Width in percent of the surface width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in percent of the surface height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The horizontal anchor.
    #[must_use]
    pub fn horizontal(&self) -> HorizontalAnchor {
        self.horizontal
    }

    /// The vertical anchor.
    #[must_use]
    pub fn vertical(&self) -> VerticalAnchor {
        self.vertical
    }

    /// Distance from the left edge, if anchored left.
    #[must_use]
    pub fn left(&self) -> Option<f64> {
        match self.horizontal {
            HorizontalAnchor::Left(v) => Some(v),
            HorizontalAnchor::Right(_) => None,
        }
    }

    /// Distance from the right edge, if anchored right.
    #[must_use]
    pub fn right(&self) -> Option<f64> {
        match self.horizontal {
            HorizontalAnchor::Right(v) => Some(v),
            HorizontalAnchor::Left(_) => None,
        }
    }

    /// Distance from the top edge, if anchored top.
    #[must_use]
    pub fn top(&self) -> Option<f64> {
        match self.vertical {
            VerticalAnchor::Top(v) => Some(v),
            VerticalAnchor::Bottom(_) => None,
        }
    }

    /// Distance from the bottom edge, if anchored bottom.
    #[must_use]
    pub fn bottom(&self) -> Option<f64> {
        match self.vertical {
            VerticalAnchor::Bottom(v) => Some(v),
            VerticalAnchor::Top(_) => None,
        }
    }

    /// Returns the box in percentage space, with `(0, 0)` at the surface's
    /// top-left corner and `(100, 100)` at its bottom-right corner.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        let x0 = match self.horizontal {
            HorizontalAnchor::Left(left) => left,
            HorizontalAnchor::Right(right) => FULL_EXTENT - right - self.width,
        };
        let y0 = match self.vertical {
            VerticalAnchor::Top(top) => top,
            VerticalAnchor::Bottom(bottom) => FULL_EXTENT - bottom - self.height,
        };
        Rect::new(x0, y0, x0 + self.width, y0 + self.height)
    }

    /// Inset strings for absolutely positioning an overlay element.
    #[must_use]
    pub fn style(&self) -> RectangleStyle {
        let edge = |v: Option<f64>| v.map_or_else(|| String::from(AUTO), percent);
        RectangleStyle {
            width: percent(self.width),
            height: percent(self.height),
            top: edge(self.top()),
            right: edge(self.right()),
            bottom: edge(self.bottom()),
            left: edge(self.left()),
        }
    }
}

const AUTO: &str = "auto";

fn percent(value: f64) -> String {
    format!("{value}%")
}

/// Overlay positioning strings produced by [`Rectangle::style`].
///
/// Every length is a percentage such as `"40%"`. The edge a rectangle is not
/// anchored to on each axis is `"auto"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RectangleStyle {
    /// Box width.
    pub width: String,
    /// Box height.
    pub height: String,
    /// Top inset or `"auto"`.
    pub top: String,
    /// Right inset or `"auto"`.
    pub right: String,
    /// Bottom inset or `"auto"`.
    pub bottom: String,
    /// Left inset or `"auto"`.
    pub left: String,
}
