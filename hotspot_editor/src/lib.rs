// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot Editor: an event-driven session for annotating an image with
//! hotspots.
//!
//! The session sits between a presentation layer and the two data crates:
//!
//! - [`hotspot_geometry`] turns pointer gestures into percentage rectangles.
//! - [`hotspot_tree`] stores each hotspot's content tree.
//!
//! The presentation layer forwards raw events (pointer press, move, and
//! release over the image; hover, blur, and button clicks in the side list)
//! and reads back what to draw: [`Editor::ghost`] while drawing,
//! [`Editor::overlays`] for the boxes, and [`Editor::store`] for the list.
//!
//! ## Example
//!
//! ```rust
//! use hotspot_editor::{Editor, EditorOptions, Removal};
//! use kurbo::{Point, Rect};
//!
//! let mut editor = Editor::new(EditorOptions::new(Rect::new(0.0, 0.0, 400.0, 200.0)));
//! editor.set_image("living-room.jpg");
//! assert!(editor.empty_state().is_some());
//!
//! // Draw a box from (80, 60) to (240, 20).
//! editor.pointer_down(Point::new(80.0, 60.0));
//! editor.pointer_move(Point::new(240.0, 20.0));
//! let index = editor.pointer_up().unwrap();
//!
//! // Rename it through a title field.
//! let id = editor.begin_title_edit([index]).unwrap();
//! editor.edit_title(id, "Sofa");
//! editor.blur(id);
//!
//! // Attach content, then remove it again after confirming.
//! let section = editor.add_child([index]).unwrap();
//! editor.add_product(section);
//! let removal = editor.remove(section, &mut |_: &str| true);
//!
//! assert_eq!(removal, Removal::Removed { count: 2 });
//! assert_eq!(editor.store().get([0]).unwrap().title(), "Sofa");
//! assert_eq!(editor.overlays().next().unwrap().style().left, "20%");
//! ```
//!
//! ## Logging
//!
//! Edits are reported through [`tracing`]: created and added nodes and
//! dropped events at `debug`, pointer moves at `trace`, and removals at
//! `info`. Installing a subscriber is left to the application.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod confirm;
mod editor;
mod options;
mod overlay;

pub use confirm::{Confirm, REMOVE_PROMPT, Removal};
pub use editor::{EMPTY_STATE, Editor};
pub use options::EditorOptions;
pub use overlay::Overlay;
