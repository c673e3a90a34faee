// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hotspot store: an ordered list of hotspot trees in a slot arena.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use hotspot_geometry::Rectangle;

use crate::error::{EditError, Exclusivity};
use crate::id::NodeId;
use crate::kind::{AddActions, Family, Level, NodeKind, PRODUCT_PLACEHOLDER, SubKind};
use crate::path::{Locate, NodePath};
use crate::snapshot::Hotspot;

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    level: Level,
    title: String,
    subs: Option<Vec<NodeId>>,
    parent: Option<NodeId>,
}

impl Node {
    /// Builds a node with its level's default title and, for containers, an
    /// empty `subs` sequence.
    fn new(kind: NodeKind, level: Level, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            level,
            title: String::from(level.default_title(kind)),
            subs: level.holds_subs(kind).then(Vec::new),
            parent,
        }
    }

    fn holds_subs(&self) -> bool {
        self.level.holds_subs(self.kind)
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Owner of every hotspot and, transitively, every node in their trees.
///
/// Nodes can be addressed by positional [`NodePath`] or by stable [`NodeId`]
/// (see [`Locate`]). Each mutation resolves its address when called and
/// returns [`EditError::UnknownNode`] if nothing lives there.
///
/// A [`revision`](Self::revision) counter bumps on every mutation that
/// changes the trees, so a presentation layer can tell when to re-render.
///
/// ```
/// use hotspot_geometry::Rectangle;
/// use hotspot_tree::{NodePath, Store, SubKind};
/// use kurbo::Point;
///
/// let mut store = Store::new();
/// let rect = Rectangle::from_drag(Point::new(10.0, 10.0), Point::new(30.0, 40.0));
/// let index = store.append_hotspot(rect);
///
/// let hotspot = NodePath::root(index);
/// store.add_child(&hotspot).unwrap();
/// assert!(!store.can_add_product(&hotspot));
///
/// let section = store.get(hotspot.child(0)).unwrap();
/// assert_eq!(section.sub_kind(), Some(SubKind::Child));
/// assert_eq!(section.title(), "Section Title");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Store {
    slots: Vec<Slot>,
    free: Vec<u32>,
    roots: Vec<NodeId>,
    exclusivity: Exclusivity,
    revision: u64,
}

impl Store {
    /// Creates an empty store that rejects exclusivity violations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given exclusivity policy.
    #[must_use]
    pub fn with_exclusivity(exclusivity: Exclusivity) -> Self {
        Self {
            exclusivity,
            ..Self::default()
        }
    }

    /// The current exclusivity policy.
    #[must_use]
    pub fn exclusivity(&self) -> Exclusivity {
        self.exclusivity
    }

    /// Changes the exclusivity policy for subsequent adds.
    pub fn set_exclusivity(&mut self, exclusivity: Exclusivity) {
        self.exclusivity = exclusivity;
    }

    /// Monotonic change counter.
    ///
    /// No-op calls (for example setting a title to its current value) leave
    /// it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of hotspots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` if there are no hotspots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of live nodes across all trees, hotspots included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Ids of all hotspots in display order.
    #[must_use]
    pub fn hotspots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Id of the hotspot at `index`.
    #[must_use]
    pub fn hotspot_id(&self, index: usize) -> Option<NodeId> {
        self.roots.get(index).copied()
    }

    /// Current root index of the hotspot `id`.
    #[must_use]
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.roots.iter().position(|&root| root == id)
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Resolves an address to the id of the node currently there.
    #[must_use]
    pub fn resolve(&self, at: impl Locate) -> Option<NodeId> {
        at.locate(self)
    }

    /// Computes the current positional path of `id`.
    #[must_use]
    pub fn path_of(&self, id: NodeId) -> Option<NodePath> {
        let mut path = NodePath::new();
        let mut current = id;
        let mut node = self.node(current)?;
        while let Some(parent) = node.parent {
            let parent_node = self.node(parent)?;
            let position = parent_node
                .subs
                .as_ref()?
                .iter()
                .position(|&sub| sub == current)?;
            path.push(position);
            current = parent;
            node = parent_node;
        }
        path.push(self.index_of(current)?);
        path.reverse();
        Some(path)
    }

    /// Read access to the node at `at`.
    #[must_use]
    pub fn get(&self, at: impl Locate) -> Option<NodeRef<'_>> {
        let id = at.locate(self)?;
        let node = self.node(id)?;
        Some(NodeRef {
            store: self,
            id,
            node,
        })
    }

    /// Appends a hotspot for `rectangle` and returns its root index.
    ///
    /// The hotspot starts with the default title and an empty `subs`.
    pub fn append_hotspot(&mut self, rectangle: Rectangle) -> usize {
        let node = Node::new(NodeKind::Hotspot(rectangle), Level::Hotspot, None);
        let id = self.alloc(node);
        self.roots.push(id);
        self.bump();
        self.roots.len() - 1
    }

    /// Assigns the level's default title if the node's title is empty.
    ///
    /// Returns whether the title changed. Calling this again on a titled node
    /// does nothing.
    pub fn ensure_default_title(&mut self, at: impl Locate) -> Result<bool, EditError> {
        let node = self.locate_mut(at)?;
        if !node.title.is_empty() {
            return Ok(false);
        }
        let default = node.level.default_title(node.kind);
        if default.is_empty() {
            return Ok(false);
        }
        node.title = String::from(default);
        self.bump();
        Ok(true)
    }

    /// Gives the node an empty `subs` sequence if it lacks one and its
    /// variant carries one.
    ///
    /// Returns whether anything changed.
    pub fn ensure_subs_initialized(&mut self, at: impl Locate) -> Result<bool, EditError> {
        let node = self.locate_mut(at)?;
        if node.subs.is_some() || !node.holds_subs() {
            return Ok(false);
        }
        node.subs = Some(Vec::new());
        self.bump();
        Ok(true)
    }

    /// Overwrites the node's title.
    pub fn set_title(&mut self, at: impl Locate, title: impl Into<String>) -> Result<(), EditError> {
        let title = title.into();
        let node = self.locate_mut(at)?;
        if node.title != title {
            node.title = title;
            self.bump();
        }
        Ok(())
    }

    /// Appends a [`SubKind::Child`] to the node's `subs`.
    pub fn add_child(&mut self, at: impl Locate) -> Result<NodeId, EditError> {
        self.add_sub(at, SubKind::Child)
    }

    /// Appends a [`SubKind::Product`] to the node's `subs`.
    pub fn add_product(&mut self, at: impl Locate) -> Result<NodeId, EditError> {
        self.add_sub(at, SubKind::Product)
    }

    /// Appends a [`SubKind::Heading`] to the node's `subs`.
    pub fn add_heading(&mut self, at: impl Locate) -> Result<NodeId, EditError> {
        self.add_sub(at, SubKind::Heading)
    }

    /// Appends a new node of variant `kind` to the `subs` of the node at `at`.
    ///
    /// The parent's `subs` is initialized first if absent. The new node gets
    /// its level's default title.
    ///
    /// # Errors
    ///
    /// - [`EditError::UnknownNode`] if `at` does not resolve.
    /// - [`EditError::NotPermitted`] if the parent is a leaf or `kind` is not
    ///   used at the child depth (see [`Level::permits`]).
    /// - [`EditError::Exclusive`] under [`Exclusivity::Reject`] if the other
    ///   sibling family is already present.
    pub fn add_sub(&mut self, at: impl Locate, kind: SubKind) -> Result<NodeId, EditError> {
        let parent = at.locate(self).ok_or(EditError::UnknownNode)?;
        let parent_node = self.node(parent).ok_or(EditError::UnknownNode)?;
        let level = parent_node
            .level
            .next()
            .filter(|level| parent_node.holds_subs() && level.permits(kind))
            .ok_or(EditError::NotPermitted { kind })?;
        if self.exclusivity == Exclusivity::Reject
            && let Some(existing) = self.conflicting_family(parent_node, kind.family())
        {
            return Err(EditError::Exclusive { kind, existing });
        }

        let id = self.alloc(Node::new(NodeKind::Sub(kind), level, Some(parent)));
        match self.node_mut(parent) {
            Some(node) => node.subs.get_or_insert_with(Vec::new).push(id),
            None => {
                self.release(id);
                return Err(EditError::UnknownNode);
            }
        }
        self.bump();
        Ok(id)
    }

    /// Removes the node at `at` together with its whole subtree.
    ///
    /// Later siblings shift down by one position; outstanding paths that
    /// pointed past the removed node now address a different node or nothing.
    /// Ids of removed nodes become stale. Returns the number of nodes
    /// discarded.
    pub fn remove_node(&mut self, at: impl Locate) -> Result<usize, EditError> {
        let id = at.locate(self).ok_or(EditError::UnknownNode)?;
        let parent = self.node(id).ok_or(EditError::UnknownNode)?.parent;
        match parent {
            Some(parent) => {
                if let Some(subs) = self.node_mut(parent).and_then(|node| node.subs.as_mut()) {
                    subs.retain(|&sub| sub != id);
                }
            }
            None => self.roots.retain(|&root| root != id),
        }

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.release(next) {
                removed += 1;
                stack.extend(node.subs.into_iter().flatten());
            }
        }
        self.bump();
        Ok(removed)
    }

    /// Whether sibling exclusivity allows adding a child to the node's `subs`.
    ///
    /// False iff a product is already present, or if the node does not
    /// resolve or carries no `subs`.
    #[must_use]
    pub fn can_add_child(&self, at: impl Locate) -> bool {
        self.can_add_family(at, Family::Section)
    }

    /// Whether sibling exclusivity allows adding a heading to the node's `subs`.
    ///
    /// Headings share the children's family, so this equals
    /// [`can_add_child`](Self::can_add_child).
    #[must_use]
    pub fn can_add_heading(&self, at: impl Locate) -> bool {
        self.can_add_family(at, Family::Section)
    }

    /// Whether sibling exclusivity allows adding a product to the node's `subs`.
    ///
    /// False iff a child or heading is already present, or if the node does
    /// not resolve or carries no `subs`.
    #[must_use]
    pub fn can_add_product(&self, at: impl Locate) -> bool {
        self.can_add_family(at, Family::Product)
    }

    /// The add affordances to show for the node at `at`.
    ///
    /// Combines the editor vocabulary for the child depth
    /// ([`Level::offers`]) with current sibling exclusivity.
    #[must_use]
    pub fn actions(&self, at: impl Locate) -> AddActions {
        let Some(node) = at.locate(self).and_then(|id| self.node(id)) else {
            return AddActions::default();
        };
        let Some(next) = node.level.next().filter(|_| node.holds_subs()) else {
            return AddActions::default();
        };
        let sections = self.conflicting_family(node, Family::Section).is_none();
        let products = self.conflicting_family(node, Family::Product).is_none();
        AddActions {
            child: sections && next.offers(SubKind::Child),
            heading: sections && next.offers(SubKind::Heading),
            product: products && next.offers(SubKind::Product),
        }
    }

    /// Iterates every node depth-first in display order, with its path.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        let stack = self
            .roots
            .iter()
            .enumerate()
            .rev()
            .map(|(index, &id)| (id, NodePath::root(index)))
            .collect();
        Walk { store: self, stack }
    }

    /// Owned copy of the hotspot at `index` and its whole tree.
    #[must_use]
    pub fn snapshot(&self, index: usize) -> Option<Hotspot> {
        self.get([index]).and_then(Hotspot::from_node)
    }

    /// Owned copies of every hotspot in display order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<Hotspot> {
        self.roots
            .iter()
            .filter_map(|&id| self.get(id).and_then(Hotspot::from_node))
            .collect()
    }

    pub(crate) fn resolve_path(&self, path: &[usize]) -> Option<NodeId> {
        let (&first, rest) = path.split_first()?;
        let mut id = *self.roots.get(first)?;
        for &position in rest {
            id = *self.node(id)?.subs.as_ref()?.get(position)?;
        }
        Some(id)
    }

    fn can_add_family(&self, at: impl Locate, family: Family) -> bool {
        match at.locate(self).and_then(|id| self.node(id)) {
            Some(node) if node.holds_subs() => self.conflicting_family(node, family).is_none(),
            _ => false,
        }
    }

    /// Returns the family among `node`'s subs that conflicts with `wanted`.
    fn conflicting_family(&self, node: &Node, wanted: Family) -> Option<Family> {
        node.subs
            .iter()
            .flatten()
            .filter_map(|&sub| self.node(sub)?.kind.sub_kind())
            .map(SubKind::family)
            .find(|&family| family != wanted)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_mut()
    }

    fn locate_mut(&mut self, at: impl Locate) -> Result<&mut Node, EditError> {
        let id = at.locate(self).ok_or(EditError::UnknownNode)?;
        self.node_mut(id).ok_or(EditError::UnknownNode)
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "an editing session never holds u32::MAX nodes"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(idx, 1)
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        let node = slot.node.take()?;
        self.free.push(id.0);
        Some(node)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Borrowed view of one live node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    store: &'a Store,
    id: NodeId,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    /// The node's id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's variant.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.node.kind
    }

    /// The sub-node variant, or `None` for a hotspot.
    #[must_use]
    pub fn sub_kind(&self) -> Option<SubKind> {
        self.node.kind.sub_kind()
    }

    /// The node's depth level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.node.level
    }

    /// The stored title, possibly empty.
    #[must_use]
    pub fn title(&self) -> &'a str {
        &self.node.title
    }

    /// The title to display: the stored title, or a placeholder for an
    /// untitled product.
    #[must_use]
    pub fn display_title(&self) -> &'a str {
        match self.node.kind {
            NodeKind::Sub(SubKind::Product) if self.node.title.is_empty() => PRODUCT_PLACEHOLDER,
            _ => &self.node.title,
        }
    }

    /// The drawn rectangle, for hotspots.
    #[must_use]
    pub fn rectangle(&self) -> Option<Rectangle> {
        match self.node.kind {
            NodeKind::Hotspot(rect) => Some(rect),
            NodeKind::Sub(_) => None,
        }
    }

    /// The containing node, or `None` for a hotspot.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.node.parent
    }

    /// Ids of the node's `subs`, empty when it has none.
    #[must_use]
    pub fn subs(&self) -> &'a [NodeId] {
        self.node.subs.as_deref().unwrap_or_default()
    }

    /// Whether the node has a `subs` sequence (possibly empty).
    #[must_use]
    pub fn subs_initialized(&self) -> bool {
        self.node.subs.is_some()
    }

    /// Whether the node has at least one sub-node.
    #[must_use]
    pub fn has_descendants(&self) -> bool {
        !self.subs().is_empty()
    }

    /// Whether the node can never hold sub-nodes.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !self.node.holds_subs()
    }

    /// The node's sub-nodes in order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        let store = self.store;
        self.subs().iter().filter_map(move |&id| store.get(id))
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.node.kind)
            .field("title", &self.node.title)
            .finish_non_exhaustive()
    }
}

/// Depth-first iterator returned by [`Store::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    store: &'a Store,
    stack: Vec<(NodeId, NodePath)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (NodePath, NodeRef<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, path) = self.stack.pop()?;
            let Some(node) = self.store.get(id) else {
                continue;
            };
            self.stack.extend(
                node.subs()
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(position, &sub)| (sub, path.child(position))),
            );
            return Some((path, node));
        }
    }
}
