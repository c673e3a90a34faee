// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node variants, depth levels, and the rules tying them together.

use hotspot_geometry::Rectangle;

/// Variant of a non-root node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubKind {
    /// A titled section that can hold further sections or products.
    Child,
    /// A titled product entry. Products never hold `subs`.
    Product,
    /// A titled heading. Below the sub-section level headings are leaf entries.
    Heading,
}

impl SubKind {
    /// The exclusivity family this variant belongs to.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::Product => Family::Product,
            Self::Child | Self::Heading => Family::Section,
        }
    }

    /// Lowercase name used in messages and data attributes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Product => "product",
            Self::Heading => "heading",
        }
    }
}

/// Variant of any node, root included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    /// A root node: one drawn region over the image.
    Hotspot(Rectangle),
    /// A node inside a hotspot's content tree.
    Sub(SubKind),
}

impl NodeKind {
    /// Returns the sub-node variant, or `None` for a hotspot.
    #[must_use]
    pub const fn sub_kind(self) -> Option<SubKind> {
        match self {
            Self::Hotspot(_) => None,
            Self::Sub(kind) => Some(kind),
        }
    }
}

/// Sibling families that may not be mixed within one `subs` sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Product entries.
    Product,
    /// Children and headings.
    Section,
}

/// Depth of a node in its hotspot tree.
///
/// The depth equals the length of the node's [`NodePath`](crate::NodePath).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Depth 1: the hotspot itself.
    Hotspot,
    /// Depth 2: direct content of a hotspot.
    Section,
    /// Depth 3: content of a section.
    SubSection,
    /// Depth 4: leaf entries of a sub-section.
    Entry,
}

/// Title given to a new hotspot.
pub const HOTSPOT_TITLE: &str = "Hotspot Title";
/// Title given to a new section child.
pub const SECTION_TITLE: &str = "Section Title";
/// Title given to a new sub-section child or heading.
pub const SUB_SECTION_TITLE: &str = "Sub Section Here";
/// Title given to a new heading entry.
pub const HEADING_TITLE: &str = "Heading";
/// Title given to a new product entry.
pub const PRODUCT_ENTRY_TITLE: &str = "product";
/// Placeholder a presentation layer shows for an untitled product.
pub const PRODUCT_PLACEHOLDER: &str = "Enter Product...";

impl Level {
    /// Maps a path length to a level.
    #[must_use]
    pub const fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(Self::Hotspot),
            2 => Some(Self::Section),
            3 => Some(Self::SubSection),
            4 => Some(Self::Entry),
            _ => None,
        }
    }

    /// The path length of nodes at this level.
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Hotspot => 1,
            Self::Section => 2,
            Self::SubSection => 3,
            Self::Entry => 4,
        }
    }

    /// The level of this level's `subs`, if it has any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_depth(self.depth() + 1)
    }

    /// Whether a node of variant `kind` may exist at this level.
    #[must_use]
    pub const fn permits(self, kind: SubKind) -> bool {
        matches!(
            (self, kind),
            (Self::Section, SubKind::Child | SubKind::Product)
                | (Self::SubSection, _)
                | (Self::Entry, SubKind::Heading | SubKind::Product)
        )
    }

    /// Whether an editor offers adding `kind` at this level.
    ///
    /// Stricter than [`permits`](Self::permits): sub-sections are offered as
    /// children, and headings only appear as entries.
    #[must_use]
    pub const fn offers(self, kind: SubKind) -> bool {
        matches!(
            (self, kind),
            (Self::Section | Self::SubSection, SubKind::Child | SubKind::Product)
                | (Self::Entry, SubKind::Heading | SubKind::Product)
        )
    }

    /// Whether a node of variant `kind` at this level carries a `subs` sequence.
    #[must_use]
    pub const fn holds_subs(self, kind: NodeKind) -> bool {
        match kind {
            NodeKind::Hotspot(_) => true,
            NodeKind::Sub(SubKind::Product) => false,
            NodeKind::Sub(SubKind::Child | SubKind::Heading) => self.next().is_some(),
        }
    }

    /// The title a node of variant `kind` starts with at this level.
    ///
    /// Products above the entry level start untitled and are shown with
    /// [`PRODUCT_PLACEHOLDER`].
    #[must_use]
    pub const fn default_title(self, kind: NodeKind) -> &'static str {
        match (self, kind) {
            (_, NodeKind::Hotspot(_)) => HOTSPOT_TITLE,
            (Self::Section, NodeKind::Sub(SubKind::Child | SubKind::Heading)) => SECTION_TITLE,
            (Self::SubSection, NodeKind::Sub(SubKind::Child | SubKind::Heading)) => {
                SUB_SECTION_TITLE
            }
            (Self::Entry, NodeKind::Sub(SubKind::Heading | SubKind::Child)) => HEADING_TITLE,
            (Self::Entry, NodeKind::Sub(SubKind::Product)) => PRODUCT_ENTRY_TITLE,
            (Self::Hotspot | Self::Section | Self::SubSection, NodeKind::Sub(SubKind::Product)) => {
                ""
            }
            (Self::Hotspot, NodeKind::Sub(_)) => "",
        }
    }
}

/// Add affordances a presentation layer should offer for one node.
///
/// Produced by [`Store::actions`](crate::Store::actions). Each flag combines
/// what the node's depth allows with what sibling exclusivity currently allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AddActions {
    /// Offer "Add Child".
    pub child: bool,
    /// Offer "Add Heading".
    pub heading: bool,
    /// Offer "Add Product".
    pub product: bool,
}

impl AddActions {
    /// Returns the flag for `kind`.
    #[must_use]
    pub const fn allows(self, kind: SubKind) -> bool {
        match kind {
            SubKind::Child => self.child,
            SubKind::Heading => self.heading,
            SubKind::Product => self.product,
        }
    }

    /// Returns `true` if no add action is offered.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.child || self.heading || self.product)
    }
}
