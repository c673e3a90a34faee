// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot Geometry: pointer-drag geometry for drawing hotspot rectangles.
//!
//! A hotspot is drawn by pressing on an image, dragging, and releasing. This
//! crate turns those raw pointer positions into a resolution-independent
//! [`Rectangle`]: width and height in percent of the surface, plus one pinned
//! horizontal edge and one pinned vertical edge.
//!
//! - [`normalize_position`] maps absolute pointer coordinates into surface
//!   percentages, with a [`ClampMode`] for positions outside the surface.
//! - [`Quadrant`] classifies the current pointer against the press point.
//! - [`Rectangle::from_drag`] is the pure geometry: which corner of the press
//!   point stays fixed, and how large the box is.
//! - [`DrawState`] tracks one gesture and hands back the finished rectangle.
//!
//! ## Example
//!
//! ```rust
//! use hotspot_geometry::{ClampMode, DrawState, normalize_position};
//! use kurbo::{Point, Rect};
//!
//! let surface = Rect::new(0.0, 0.0, 400.0, 200.0);
//! let mut draw = DrawState::new();
//!
//! let press = normalize_position(Point::new(80.0, 60.0), surface, ClampMode::PassThrough).unwrap();
//! draw.start(press);
//!
//! let moved = normalize_position(Point::new(240.0, 20.0), surface, ClampMode::PassThrough).unwrap();
//! draw.update(moved);
//!
//! let rect = draw.end().unwrap();
//! assert_eq!(rect.left(), Some(20.0));
//! assert_eq!(rect.bottom(), Some(70.0));
//! assert_eq!(rect.width(), 40.0);
//! assert_eq!(rect.height(), 20.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod draw;
mod position;
mod rectangle;

pub use draw::DrawState;
pub use position::{ClampMode, FULL_EXTENT, normalize_position};
pub use rectangle::{HorizontalAnchor, Quadrant, Rectangle, RectangleStyle, VerticalAnchor};
