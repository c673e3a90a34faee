// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime configuration for an editing session.

use hotspot_geometry::ClampMode;
use hotspot_tree::Exclusivity;
use kurbo::Rect;

/// Options for an [`Editor`](crate::Editor).
///
/// The default has an empty surface, so pointer input is ignored until
/// [`Editor::set_surface`](crate::Editor::set_surface) is called with the
/// image's on-screen bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EditorOptions {
    /// Bounds of the drawing surface, in the same coordinate space as pointer
    /// positions.
    pub surface: Rect,
    /// How pointer positions outside `surface` are treated.
    pub clamp: ClampMode,
    /// Whether the store rejects mixing products with other content.
    pub exclusivity: Exclusivity,
}

impl EditorOptions {
    /// Options for a drawing surface at `surface`, other settings default.
    #[must_use]
    pub fn new(surface: Rect) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    /// Sets the clamp mode.
    #[must_use]
    pub fn with_clamp(mut self, clamp: ClampMode) -> Self {
        self.clamp = clamp;
        self
    }

    /// Sets the exclusivity policy.
    #[must_use]
    pub fn with_exclusivity(mut self, exclusivity: Exclusivity) -> Self {
        self.exclusivity = exclusivity;
        self
    }
}
