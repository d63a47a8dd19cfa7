//! Tree Nav - two-level card navigation for the browser
//!
//! Core modules:
//! - `nav`: Navigation state read from the URL, view routing, link building
//! - `cards`: Card set generation and the container it renders into
//! - `controller`: Per-page-load decisions (title, cards, nav buttons)
//! - `action`: Click effects (navigate, alert)
//! - `dom`: web-sys bindings that apply a page plan (wasm32 only)
//! - `settings`: Persisted preferences

pub mod action;
pub mod cards;
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod nav;
pub mod settings;

pub use action::Action;
pub use cards::{Card, CardContainer, render_cards};
pub use controller::{
    ButtonPlan, CardClick, CardPlan, DisabledChange, NavButton, PagePlan, PageStep,
};
pub use error::{NavError, Result};
pub use nav::{NavigationState, View};
pub use settings::{LogLevel, Settings};

/// Page configuration constants
pub mod consts {
    /// Cards shown on the root page
    pub const ROOT_CARD_COUNT: u32 = 10;
    /// Cards shown on a child page
    pub const CHILD_CARD_COUNT: u32 = 3;

    /// Query parameter names
    pub const PARAM_LEVEL: &str = "level";
    pub const PARAM_PARENT: &str = "parent";
    pub const PARAM_NODE: &str = "node";

    /// The only parent branch that currently exists
    pub const ROOT_PARENT: &str = "root";
    /// Node label shown on a child page reached without a `node` parameter
    pub const ABSENT_NODE: &str = "null";
    /// Node the forward button jumps to from the root page
    pub const FORWARD_SHORTCUT_NODE: u32 = 1;

    /// Host page element ids
    pub const ID_CARDS_CONTAINER: &str = "cards-container";
    pub const ID_PAGE_TITLE: &str = "page-title";
    pub const ID_BTN_FORWARD: &str = "btn-forward";
    pub const ID_BTN_BACKWARD: &str = "btn-backward";

    /// CSS classes
    pub const CLASS_CARD: &str = "card";
    pub const CLASS_CARD_TITLE: &str = "card-title";
    pub const CLASS_CARD_SUBTITLE: &str = "card-subtitle";
    pub const CLASS_CARD_FOOTER: &str = "card-footer";
    pub const CLASS_DISABLED: &str = "disabled";

    /// Labels
    pub const ROOT_TITLE: &str = "Root Level – Main Tools";
    pub const ROOT_CARD_PREFIX: &str = "Root Card";
    pub const ROOT_SUBTITLE: &str = "Top-level option in your hierarchy";
    pub const CHILD_SUBTITLE: &str = "Second-level node in the tree";
    pub const CARD_FOOTER: &str = "Click to navigate deeper";
}
