// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the hotspot demos.
//!
//! The demos are headless: instead of drawing an image and a side list they
//! print what a presentation layer would show.

use std::fmt::Write as _;

use hotspot_editor::Editor;
use hotspot_tree::{Level, PRODUCT_PLACEHOLDER};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `debug`
/// for the hotspot crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hotspot_editor=debug,info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Renders the side list as indented text, one line per node.
///
/// Collapsed items hide their content; untitled products show the
/// placeholder in brackets.
pub fn render_list(editor: &Editor) -> String {
    let mut out = String::new();
    if let Some(message) = editor.empty_state() {
        out.push_str(message);
        out.push('\n');
        return out;
    }
    let mut hidden_below: Option<usize> = None;
    for (path, node) in editor.store().walk() {
        let depth = path.depth();
        match hidden_below {
            Some(limit) if depth > limit => continue,
            _ => hidden_below = None,
        }
        let marker = if editor.is_collapsed(node.id()) {
            hidden_below = Some(depth);
            "+"
        } else {
            "-"
        };
        let title = match node.title() {
            "" => format!("[{PRODUCT_PLACEHOLDER}]"),
            title => title.to_owned(),
        };
        let kind = match node.sub_kind() {
            None => "hotspot",
            Some(kind) => kind.name(),
        };
        let indent = "  ".repeat(depth - Level::Hotspot.depth());
        let _ = writeln!(out, "{indent}{marker} {title} ({kind} {path:?})");
    }
    out
}

/// Renders the overlay boxes with their inset styles.
pub fn render_overlays(editor: &Editor) -> String {
    let mut out = String::new();
    for overlay in editor.overlays() {
        let style = overlay.style();
        let hover = if overlay.hovered { " *hovered*" } else { "" };
        let _ = writeln!(
            out,
            "#{} {}: left={} right={} top={} bottom={} width={} height={}{hover}",
            overlay.index,
            overlay.id,
            style.left,
            style.right,
            style.top,
            style.bottom,
            style.width,
            style.height,
        );
    }
    out
}
