//! View routing
//!
//! Maps a `NavigationState` onto the page it selects. Every state maps to
//! exactly one variant; states that match no page land on `Unknown` and the
//! caller has to deal with that explicitly.

use super::query::NavigationState;
use crate::consts::ROOT_PARENT;

/// Page selected by the URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Level 0: the top-level cards
    Root,
    /// Level 1 under `parent`, reached from root card `node`
    Child {
        parent: String,
        node: Option<String>,
    },
    /// Any other level/parent combination (e.g. level 2, or level 1 without
    /// a recognized parent)
    Unknown,
}

impl View {
    /// Route a navigation state
    pub fn resolve(state: &NavigationState) -> Self {
        match (state.level, state.parent.as_deref()) {
            (0, _) => View::Root,
            (1, Some(parent)) if parent == ROOT_PARENT => View::Child {
                parent: parent.to_owned(),
                node: state.node.clone(),
            },
            _ => View::Unknown,
        }
    }

    /// Short name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Root => "root",
            View::Child { .. } => "child",
            View::Unknown => "unknown",
        }
    }
}
