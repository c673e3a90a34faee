// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit errors and the exclusivity policy.

use core::fmt;

use crate::kind::{Family, SubKind};

/// Error returned by store mutations.
///
/// None of these are fatal. Interactive callers typically drop them: the
/// edit simply has no visible effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditError {
    /// The path or id does not address a live node.
    ///
    /// This is the expected outcome of a deferred edit whose node was removed
    /// (or, for paths, shifted) before the edit was committed.
    UnknownNode,
    /// The addressed node cannot hold a sub-node of this variant, either
    /// because it is a leaf or because the variant is not used at that depth.
    NotPermitted {
        /// The variant that was requested.
        kind: SubKind,
    },
    /// The addressed node's `subs` already holds the other sibling family.
    Exclusive {
        /// The variant that was requested.
        kind: SubKind,
        /// The family already present.
        existing: Family,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode => f.write_str("no node at the given address"),
            Self::NotPermitted { kind } => {
                write!(f, "a {} cannot be added here", kind.name())
            }
            Self::Exclusive { kind, existing } => write!(
                f,
                "a {} cannot be added next to {} siblings",
                kind.name(),
                match existing {
                    Family::Product => "product",
                    Family::Section => "child or heading",
                }
            ),
        }
    }
}

impl core::error::Error for EditError {}

/// How the store treats an add that would mix sibling families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Exclusivity {
    /// Return [`EditError::Exclusive`] and leave the tree unchanged.
    #[default]
    Reject,
    /// Perform the add anyway.
    ///
    /// Exclusivity then only holds as long as callers consult
    /// [`Store::actions`](crate::Store::actions) or the `can_add_*` queries
    /// before offering an add.
    Allow,
}
