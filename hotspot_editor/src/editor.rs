// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editing session.

use alloc::string::String;

use hashbrown::{HashMap, HashSet};
use hotspot_geometry::{DrawState, Rectangle, normalize_position};
use hotspot_tree::{AddActions, Locate, NodeId, Store, SubKind};
use kurbo::{Point, Rect};
use tracing::{debug, info, trace};

use crate::confirm::{Confirm, REMOVE_PROMPT, Removal};
use crate::options::EditorOptions;
use crate::overlay::Overlay;

/// Message shown in the list while no hotspot exists.
pub const EMPTY_STATE: &str = "Draw a box on the image to the left to create a hotspot.";

/// One editing session over one image.
///
/// The editor owns the [`Store`] and translates presentation events into
/// store edits:
///
/// - pointer press, move, and release over the image draw a new hotspot;
/// - hovering a list item highlights its box;
/// - title fields keep a draft that is committed on blur;
/// - add and remove buttons edit the content trees.
///
/// Every handler takes an address that is resolved when the event arrives.
/// Events for nodes that have since been removed are dropped and logged at
/// `debug` level; they never touch a different node.
#[derive(Clone, Debug, Default)]
pub struct Editor {
    store: Store,
    options: EditorOptions,
    draw: DrawState,
    hovered: Option<NodeId>,
    drafts: HashMap<NodeId, String>,
    collapsed: HashSet<NodeId>,
    image: Option<String>,
}

impl Editor {
    /// Creates an empty session.
    #[must_use]
    pub fn new(options: EditorOptions) -> Self {
        Self {
            store: Store::with_exclusivity(options.exclusivity),
            options,
            ..Self::default()
        }
    }

    /// The session's configuration.
    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Updates the drawing surface, for example after a layout change.
    ///
    /// A gesture in progress keeps its percentage anchor.
    pub fn set_surface(&mut self, surface: Rect) {
        self.options.surface = surface;
    }

    /// Read access to every hotspot tree.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Ends the session, returning the edited hotspots.
    #[must_use]
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Sets the reference of the image being annotated.
    ///
    /// The editor never interprets it.
    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = Some(image.into());
    }

    /// The reference of the image being annotated.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// The empty-list message, or `None` once a hotspot exists.
    #[must_use]
    pub fn empty_state(&self) -> Option<&'static str> {
        self.store.is_empty().then_some(EMPTY_STATE)
    }

    // --- Drawing ---

    /// Handles a pointer press over the image.
    ///
    /// Returns whether a gesture started; it does not when the surface is
    /// degenerate.
    pub fn pointer_down(&mut self, pointer: Point) -> bool {
        let Some(pos) = self.normalize(pointer) else {
            debug!(?pointer, surface = ?self.options.surface, "press ignored: empty surface");
            return false;
        };
        self.draw.start(pos);
        true
    }

    /// Handles a pointer move over the image and returns the ghost rectangle.
    ///
    /// Moves without a preceding press return `None`.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<Rectangle> {
        if !self.draw.is_drawing() {
            return None;
        }
        let pos = self.normalize(pointer)?;
        let rect = self.draw.update(pos);
        trace!(?pos, ?rect, "drawing");
        rect
    }

    /// Handles a pointer release and appends the drawn hotspot.
    ///
    /// Returns the new hotspot's root index, or `None` when no gesture was in
    /// progress or the pointer never moved.
    pub fn pointer_up(&mut self) -> Option<usize> {
        let rect = self.draw.end()?;
        let index = self.store.append_hotspot(rect);
        debug!(index, ?rect, "hotspot created");
        Some(index)
    }

    /// The rectangle of the gesture in progress.
    #[must_use]
    pub fn ghost(&self) -> Option<Rectangle> {
        self.draw.current()
    }

    /// Whether a press has started a gesture that has not been released.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.draw.is_drawing()
    }

    fn normalize(&self, pointer: Point) -> Option<Point> {
        normalize_position(pointer, self.options.surface, self.options.clamp)
    }

    // --- Hover ---

    /// Marks the hotspot at root `index` as hovered, replacing any other.
    pub fn hover_enter(&mut self, index: usize) {
        self.hovered = self.store.hotspot_id(index);
        if self.hovered.is_none() {
            debug!(index, "hover ignored: no such hotspot");
        }
    }

    /// Clears the hovered hotspot.
    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    /// The current root index of the hovered hotspot.
    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered.and_then(|id| self.store.index_of(id))
    }

    /// The id of the hovered hotspot.
    #[must_use]
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered.filter(|&id| self.store.is_alive(id))
    }

    /// One overlay per hotspot, in root order.
    pub fn overlays(&self) -> impl Iterator<Item = Overlay> + '_ {
        let hovered = self.hovered();
        self.store
            .hotspots()
            .iter()
            .enumerate()
            .filter_map(move |(index, &id)| {
                let rectangle = self.store.get(id)?.rectangle()?;
                Some(Overlay {
                    index,
                    id,
                    rectangle,
                    hovered: hovered == Some(id),
                })
            })
    }

    // --- Titles ---

    /// Opens a title draft for the node at `at`, seeded with its title.
    ///
    /// Returns the id the draft is keyed by, or `None` if `at` does not
    /// resolve. Later edits and the commit address the node by this id.
    pub fn begin_title_edit(&mut self, at: impl Locate) -> Option<NodeId> {
        let node = self.store.get(at)?;
        let id = node.id();
        let title = String::from(node.title());
        self.drafts.entry(id).or_insert(title);
        Some(id)
    }

    /// Replaces the draft title of `id`.
    ///
    /// Opens a draft if none exists. Returns `false` if `id` is stale.
    pub fn edit_title(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        if !self.store.is_alive(id) {
            self.drafts.remove(&id);
            debug!(%id, "title edit dropped: node removed");
            return false;
        }
        self.drafts.insert(id, text.into());
        true
    }

    /// The uncommitted title of `id`.
    #[must_use]
    pub fn draft(&self, id: NodeId) -> Option<&str> {
        self.drafts.get(&id).map(String::as_str)
    }

    /// Commits the draft of `id` to the store.
    ///
    /// An emptied title falls back to the level default. Returns whether a
    /// commit happened; drafts of removed nodes are discarded.
    pub fn blur(&mut self, id: NodeId) -> bool {
        let Some(title) = self.drafts.remove(&id) else {
            return false;
        };
        if let Err(error) = self.store.set_title(id, title) {
            debug!(%id, %error, "title commit dropped");
            return false;
        }
        // The node was just resolved, so the repair cannot miss.
        let _ = self.store.ensure_default_title(id);
        true
    }

    // --- Structure ---

    /// Appends a child under `at`. Returns the new id, or `None` if rejected.
    pub fn add_child(&mut self, at: impl Locate) -> Option<NodeId> {
        self.add(at, SubKind::Child)
    }

    /// Appends a product under `at`. Returns the new id, or `None` if rejected.
    pub fn add_product(&mut self, at: impl Locate) -> Option<NodeId> {
        self.add(at, SubKind::Product)
    }

    /// Appends a heading under `at`. Returns the new id, or `None` if rejected.
    pub fn add_heading(&mut self, at: impl Locate) -> Option<NodeId> {
        self.add(at, SubKind::Heading)
    }

    fn add(&mut self, at: impl Locate, kind: SubKind) -> Option<NodeId> {
        match self.store.add_sub(at, kind) {
            Ok(id) => {
                debug!(%id, kind = kind.name(), "node added");
                Some(id)
            }
            Err(error) => {
                debug!(kind = kind.name(), %error, "add rejected");
                None
            }
        }
    }

    /// The add buttons to show for the node at `at`.
    #[must_use]
    pub fn actions(&self, at: impl Locate) -> AddActions {
        self.store.actions(at)
    }

    /// Removes the node at `at` with its subtree.
    ///
    /// A node that still has content is only removed after `confirm` answers
    /// yes to [`REMOVE_PROMPT`].
    pub fn remove(&mut self, at: impl Locate, confirm: &mut impl Confirm) -> Removal {
        let Some(node) = self.store.get(at) else {
            debug!("remove ignored: node not found");
            return Removal::Stale;
        };
        let id = node.id();
        if node.has_descendants() && !confirm.confirm(REMOVE_PROMPT) {
            debug!(%id, "remove cancelled");
            return Removal::Cancelled;
        }
        let Ok(count) = self.store.remove_node(id) else {
            return Removal::Stale;
        };
        self.forget_removed();
        info!(%id, count, "node removed");
        Removal::Removed { count }
    }

    fn forget_removed(&mut self) {
        let store = &self.store;
        self.drafts.retain(|&id, _| store.is_alive(id));
        self.collapsed.retain(|&id| store.is_alive(id));
        self.hovered = self.hovered.filter(|&id| store.is_alive(id));
    }

    // --- Collapse ---

    /// Flips the collapsed state of the list item at `at`.
    ///
    /// Returns the new state, or `None` if `at` does not resolve.
    pub fn toggle_collapsed(&mut self, at: impl Locate) -> Option<bool> {
        let id = self.store.resolve(at)?;
        if self.collapsed.remove(&id) {
            Some(false)
        } else {
            self.collapsed.insert(id);
            Some(true)
        }
    }

    /// Whether the list item at `at` is collapsed. Items start expanded.
    #[must_use]
    pub fn is_collapsed(&self, at: impl Locate) -> bool {
        self.store
            .resolve(at)
            .is_some_and(|id| self.collapsed.contains(&id))
    }
}
