//! Navigation module
//!
//! Everything the page knows about "where am I" comes from the URL:
//! - `query`: the raw `{level, parent, node}` read from the query string
//! - `view`: which page that state selects (root, child, or unknown)
//! - `href`: links for every transition between pages

pub mod href;
pub mod query;
pub mod view;

pub use href::{child_href, root_href};
pub use query::{NavigationState, parse_level};
pub use view::View;
