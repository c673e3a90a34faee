// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw state helper: turn a press-move-release gesture into a [`Rectangle`].
//!
//! ## Usage
//!
//! 1) On pointer down, call [`DrawState::start`] with the press position in surface percentages.
//! 2) On each move event, call [`DrawState::update`] to get the rectangle spanned so far.
//! 3) On pointer up, call [`DrawState::end`] to take the finished rectangle and reset state.
//!
//! ## Minimal example
//!
//! ```
//! use hotspot_geometry::DrawState;
//! use kurbo::Point;
//!
//! let mut draw = DrawState::default();
//!
//! draw.start(Point::new(20.0, 30.0));
//! assert!(draw.is_drawing());
//!
//! let ghost = draw.update(Point::new(60.0, 10.0)).unwrap();
//! assert_eq!(ghost.width(), 40.0);
//!
//! let done = draw.end().unwrap();
//! assert_eq!(done, ghost);
//! assert!(!draw.is_drawing());
//! ```

use kurbo::Point;

use crate::rectangle::Rectangle;

/// Tracks one rectangle-drawing gesture.
///
/// Only the press position and the most recent rectangle are kept; each move
/// rederives the rectangle from the press position.
#[derive(Debug, Clone, Default, Copy)]
pub struct DrawState {
    anchor: Option<Point>,
    current: Option<Rectangle>,
}

impl DrawState {
    /// Creates an idle draw state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            anchor: None,
            current: None,
        }
    }

    /// Starts a new gesture anchored at `pos`.
    ///
    /// Any rectangle left over from an earlier gesture is discarded.
    pub fn start(&mut self, pos: Point) {
        self.anchor = Some(pos);
        self.current = None;
    }

    /// Recomputes the rectangle for a pointer at `pos`.
    ///
    /// Returns `None` and records nothing when no gesture is active.
    pub fn update(&mut self, pos: Point) -> Option<Rectangle> {
        let anchor = self.anchor?;
        let rect = Rectangle::from_drag(anchor, pos);
        self.current = Some(rect);
        Some(rect)
    }

    /// Finishes the gesture, returning the last computed rectangle.
    ///
    /// Returns `None` if no gesture was active or the pointer never moved
    /// after the press. State is reset either way.
    pub fn end(&mut self) -> Option<Rectangle> {
        let started = self.anchor.take().is_some();
        let rect = self.current.take();
        if started { rect } else { None }
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.anchor.is_some()
    }

    /// The press position of the active gesture.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// The rectangle computed by the latest [`update`](Self::update).
    #[must_use]
    pub fn current(&self) -> Option<Rectangle> {
        self.current
    }
}
