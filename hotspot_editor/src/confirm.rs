// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blocking yes/no confirmation for destructive edits.

/// Prompt shown before removing a node that still has content.
pub const REMOVE_PROMPT: &str = "This will remove all child content, are you sure?";

/// A synchronous yes/no question answered by the user.
///
/// The editor waits for the answer before acting, so a negative answer
/// always cancels. Closures taking the prompt implement this trait:
///
/// ```rust
/// use hotspot_editor::Confirm;
///
/// fn ask(confirm: &mut impl Confirm) -> bool {
///     confirm.confirm("Proceed?")
/// }
///
/// assert!(ask(&mut |_: &str| true));
/// assert!(!ask(&mut |_: &str| false));
/// ```
pub trait Confirm {
    /// Asks `prompt` and returns `true` for "yes".
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Outcome of [`Editor::remove`](crate::Editor::remove).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Removal {
    /// The node and its subtree were removed.
    Removed {
        /// Number of nodes discarded, the target included.
        count: usize,
    },
    /// The user declined the confirmation; nothing changed.
    Cancelled,
    /// The target no longer exists; nothing changed.
    Stale,
}
