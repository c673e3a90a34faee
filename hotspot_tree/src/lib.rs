// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot Tree: the content model behind a hotspot editor.
//!
//! Every drawn hotspot is the root of a small, fixed-depth content tree:
//!
//! ```text
//! Hotspot                      "Hotspot Title"
//! ├── Child (section)          "Section Title"
//! │   ├── Child (sub-section)  "Sub Section Here"
//! │   │   ├── Heading          "Heading"
//! │   │   └── Product          "product"
//! │   └── ...
//! └── ...
//! ```
//!
//! The vocabulary shifts with depth (see [`Level`]): sections and
//! sub-sections are children, entries under a sub-section are headings, and
//! products may appear at any depth below the hotspot. Within a single `subs`
//! sequence products and non-products never mix ("sibling exclusivity").
//!
//! ## API overview
//!
//! - [`Store`]: owns every hotspot and node; path- or id-addressed mutations.
//! - [`NodePath`]: positional address (`[hotspot, section, ...]`).
//! - [`NodeId`]: generational handle that survives sibling edits.
//! - [`Locate`]: anything a store operation can be addressed with.
//! - [`NodeRef`]: borrowed read view of a live node.
//! - [`Hotspot`] / [`SubNode`]: owned snapshots for presentation.
//! - [`EditError`] and [`Exclusivity`]: failure reporting and policy.
//!
//! Key operations:
//! - [`Store::append_hotspot`] → root index
//! - [`Store::add_child`] / [`Store::add_product`] / [`Store::add_heading`] → [`NodeId`]
//! - [`Store::set_title`], [`Store::ensure_default_title`], [`Store::ensure_subs_initialized`]
//! - [`Store::remove_node`] → number of discarded nodes
//! - [`Store::can_add_child`] / [`Store::can_add_product`] and [`Store::actions`]
//!
//! ## Paths versus ids
//!
//! Paths are convenient for event handlers that know where an item is drawn,
//! but they are positional: removing hotspot `1` of three makes the old
//! hotspot `2` answer to path `[1]`, and path `[2]` stops resolving.
//! Anything that outlives a single event (an open title editor, for example)
//! should hold the [`NodeId`] instead. Id-addressed operations on removed
//! nodes fail with [`EditError::UnknownNode`] rather than touching whatever
//! took their place.
//!
//! ```rust
//! use hotspot_geometry::Rectangle;
//! use hotspot_tree::{EditError, NodePath, Store};
//! use kurbo::Point;
//!
//! let rect = Rectangle::from_drag(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
//! let mut store = Store::new();
//! for _ in 0..3 {
//!     store.append_hotspot(rect);
//! }
//! let last = store.hotspot_id(2).unwrap();
//!
//! store.remove_node([1]).unwrap();
//!
//! assert_eq!(store.resolve([1]), Some(last));
//! assert_eq!(store.resolve([2]), None);
//! assert_eq!(store.set_title([2], "gone"), Err(EditError::UnknownNode));
//! assert_eq!(store.set_title(last, "kept"), Ok(()));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod id;
mod kind;
mod path;
mod snapshot;
mod store;

pub use error::{EditError, Exclusivity};
pub use id::NodeId;
pub use kind::{
    AddActions, Family, HEADING_TITLE, HOTSPOT_TITLE, Level, NodeKind, PRODUCT_ENTRY_TITLE,
    PRODUCT_PLACEHOLDER, SECTION_TITLE, SUB_SECTION_TITLE, SubKind,
};
pub use path::{Locate, NodePath};
pub use snapshot::{Hotspot, SubNode};
pub use store::{NodeRef, Store, Walk};
