// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positional paths and the [`Locate`] addressing trait.

use core::fmt;
use core::ops::Deref;

use smallvec::SmallVec;

use crate::id::NodeId;
use crate::store::Store;

/// A node address made of ordinal positions.
///
/// The first index selects a hotspot in the root list; each following index
/// selects an entry in the previous node's `subs`. Trees are at most four
/// levels deep, so paths stay inline.
///
/// A path is only meaningful against the store state it was computed from:
/// removing an earlier sibling shifts every later sibling down by one. Hold a
/// [`NodeId`] instead when the address must survive edits.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(SmallVec<[usize; 4]>);

impl NodePath {
    /// Creates an empty path (which addresses nothing).
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Creates a path addressing the hotspot at `index`.
    #[must_use]
    pub fn root(index: usize) -> Self {
        let mut path = Self::new();
        path.0.push(index);
        path
    }

    /// Returns this path extended by one more position.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.0.push(index);
        path
    }

    /// Appends a position in place.
    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    /// Returns the path of the containing node, or `None` for a root path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self.0.len() {
            0 | 1 => None,
            len => Some(Self(self.0[..len - 1].iter().copied().collect())),
        }
    }

    /// Returns the last position, i.e. the index within the parent's `subs`.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Number of positions in the path, equal to the addressed node's depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The positions as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }
}

impl Deref for NodePath {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<&[usize]> for NodePath {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for NodePath {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<usize> for NodePath {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Something that can be resolved to a live node of a [`Store`].
///
/// Store operations accept any `Locate`: a [`NodeId`], a [`NodePath`], or a
/// plain index slice/array. Resolution happens at the moment the operation is
/// dispatched, so a path always targets whatever currently sits at that
/// position while an id only ever targets the node it was issued for.
pub trait Locate {
    /// Resolves to the id of a live node, or `None` if nothing is there.
    fn locate(&self, store: &Store) -> Option<NodeId>;
}

impl Locate for NodeId {
    fn locate(&self, store: &Store) -> Option<NodeId> {
        store.is_alive(*self).then_some(*self)
    }
}

impl Locate for [usize] {
    fn locate(&self, store: &Store) -> Option<NodeId> {
        store.resolve_path(self)
    }
}

impl<const N: usize> Locate for [usize; N] {
    fn locate(&self, store: &Store) -> Option<NodeId> {
        store.resolve_path(self)
    }
}

impl Locate for NodePath {
    fn locate(&self, store: &Store) -> Option<NodeId> {
        store.resolve_path(self.as_slice())
    }
}

impl<T: Locate + ?Sized> Locate for &T {
    fn locate(&self, store: &Store) -> Option<NodeId> {
        (**self).locate(store)
    }
}
