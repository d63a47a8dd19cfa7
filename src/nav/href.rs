//! Links between pages
//!
//! Every page is the same document; only the query differs.

use crate::consts::{PARAM_LEVEL, PARAM_NODE, PARAM_PARENT, ROOT_PARENT};

/// Link to the child page of root card `node`
pub fn child_href(pathname: &str, node: u32) -> String {
    format!(
        "{}?{}=1&{}={}&{}={}",
        pathname, PARAM_LEVEL, PARAM_PARENT, ROOT_PARENT, PARAM_NODE, node
    )
}

/// Link to the root page (bare path, no query)
pub fn root_href(pathname: &str) -> String {
    pathname.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{NavigationState, View};

    #[test]
    fn test_child_href_query_is_exact() {
        let href = child_href("/index.html", 7);
        assert_eq!(href, "/index.html?level=1&parent=root&node=7");
    }

    #[test]
    fn test_root_href_has_no_query() {
        assert_eq!(root_href("/app/"), "/app/");
        assert!(!root_href("/app/").contains('?'));
    }

    #[test]
    fn test_child_href_resolves_to_child_view() {
        let href = child_href("/", 4);
        let (_, query) = href.split_once('?').unwrap();
        let view = View::resolve(&NavigationState::from_query(query));
        assert_eq!(
            view,
            View::Child {
                parent: "root".to_string(),
                node: Some("4".to_string()),
            }
        );
    }
}
