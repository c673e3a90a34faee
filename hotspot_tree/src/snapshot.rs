// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned copies of hotspot trees.

use alloc::string::String;
use alloc::vec::Vec;

use hotspot_geometry::Rectangle;

use crate::id::NodeId;
use crate::kind::SubKind;
use crate::store::NodeRef;

/// Owned copy of one hotspot and its content tree.
///
/// Produced by [`Store::snapshot`](crate::Store::snapshot). Snapshots do not
/// track later edits.
#[derive(Clone, Debug, PartialEq)]
pub struct Hotspot {
    /// Id of the hotspot in the store it was copied from.
    pub id: NodeId,
    /// The drawn region.
    pub rectangle: Rectangle,
    /// The hotspot title.
    pub title: String,
    /// Content in display order.
    pub subs: Vec<SubNode>,
}

impl Hotspot {
    /// Copies the tree rooted at `node`, or `None` if `node` is not a hotspot.
    #[must_use]
    pub fn from_node(node: NodeRef<'_>) -> Option<Self> {
        Some(Self {
            id: node.id(),
            rectangle: node.rectangle()?,
            title: String::from(node.title()),
            subs: node.children().filter_map(SubNode::from_node).collect(),
        })
    }
}

/// Owned copy of one non-root node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubNode {
    /// A section.
    Child {
        /// Id in the source store.
        id: NodeId,
        /// Section title.
        title: String,
        /// Nested content.
        subs: Vec<SubNode>,
    },
    /// A product entry.
    Product {
        /// Id in the source store.
        id: NodeId,
        /// Product title, possibly empty.
        title: String,
    },
    /// A heading.
    Heading {
        /// Id in the source store.
        id: NodeId,
        /// Heading title.
        title: String,
        /// Nested content; always empty for entry-level headings.
        subs: Vec<SubNode>,
    },
}

impl SubNode {
    /// Copies the subtree rooted at `node`, or `None` if `node` is a hotspot.
    #[must_use]
    pub fn from_node(node: NodeRef<'_>) -> Option<Self> {
        let id = node.id();
        let title = String::from(node.title());
        let subs = || node.children().filter_map(Self::from_node).collect();
        Some(match node.sub_kind()? {
            SubKind::Child => Self::Child {
                id,
                title,
                subs: subs(),
            },
            SubKind::Product => Self::Product { id, title },
            SubKind::Heading => Self::Heading {
                id,
                title,
                subs: subs(),
            },
        })
    }

    /// The variant tag.
    #[must_use]
    pub fn kind(&self) -> SubKind {
        match self {
            Self::Child { .. } => SubKind::Child,
            Self::Product { .. } => SubKind::Product,
            Self::Heading { .. } => SubKind::Heading,
        }
    }

    /// Id in the source store.
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::Child { id, .. } | Self::Product { id, .. } | Self::Heading { id, .. } => *id,
        }
    }

    /// The node title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Child { title, .. } | Self::Product { title, .. } | Self::Heading { title, .. } => {
                title
            }
        }
    }

    /// Nested content; empty for products.
    #[must_use]
    pub fn subs(&self) -> &[Self] {
        match self {
            Self::Child { subs, .. } | Self::Heading { subs, .. } => subs,
            Self::Product { .. } => &[],
        }
    }
}
