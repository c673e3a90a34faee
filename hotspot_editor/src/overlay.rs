// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-hotspot rendering data for the image overlay.

use hotspot_geometry::{Rectangle, RectangleStyle};
use hotspot_tree::NodeId;

/// One hotspot box to draw over the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlay {
    /// Root index of the hotspot, as shown to the user.
    pub index: usize,
    /// Stable id of the hotspot.
    pub id: NodeId,
    /// The drawn region.
    pub rectangle: Rectangle,
    /// Whether the hotspot's list item is hovered.
    pub hovered: bool,
}

impl Overlay {
    /// Percentage style properties for positioning the box.
    #[must_use]
    pub fn style(&self) -> RectangleStyle {
        self.rectangle.style()
    }
}
