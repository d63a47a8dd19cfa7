//! Query string reader
//!
//! Rebuilt from the URL on every page load and never stored anywhere else.

use crate::consts::{PARAM_LEVEL, PARAM_NODE, PARAM_PARENT};

/// Navigation state carried in the URL query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// Depth in the hierarchy (0 = root). Not range checked.
    pub level: i64,
    /// Branch the page belongs to
    pub parent: Option<String>,
    /// Card selected on the previous level, kept as an opaque string
    pub node: Option<String>,
}

impl NavigationState {
    /// Build from the three raw parameter values
    ///
    /// Empty values count as absent; a missing or unparsable level is 0.
    pub fn from_values(level: Option<&str>, parent: Option<&str>, node: Option<&str>) -> Self {
        let level = parse_level(non_empty(level).unwrap_or("0")).unwrap_or(0);

        Self {
            level,
            parent: non_empty(parent).map(str::to_owned),
            node: non_empty(node).map(str::to_owned),
        }
    }

    /// Build from decoded key/value pairs. The first occurrence of a key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut level: Option<String> = None;
        let mut parent: Option<String> = None;
        let mut node: Option<String> = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                PARAM_LEVEL => &mut level,
                PARAM_PARENT => &mut parent,
                PARAM_NODE => &mut node,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_owned());
            }
        }

        Self::from_values(level.as_deref(), parent.as_deref(), node.as_deref())
    }

    /// Parse a raw query string (`?a=b&c=d`, leading `?` optional)
    ///
    /// Values are taken literally. No percent-decoding happens here; the
    /// browser path goes through `URLSearchParams` instead.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(
            query
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| pair.split_once('=').unwrap_or((pair, ""))),
        )
    }

    /// Read the state from the current document location (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn read() -> crate::Result<Self> {
        let window = web_sys::window().ok_or(crate::NavError::NoWindow)?;
        let search = window.location().search()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search)?;

        let state = Self::from_values(
            params.get(PARAM_LEVEL).as_deref(),
            params.get(PARAM_PARENT).as_deref(),
            params.get(PARAM_NODE).as_deref(),
        );
        log::debug!("Query {:?} -> {:?}", search, state);
        Ok(state)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Whitespace skipped before a level: Unicode `White_Space` plus the BOM
/// (U+FEFF), minus NEL (U+0085), matching `parseInt`
fn is_level_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Parse the leading base-10 integer of `raw`
///
/// Accepts leading whitespace, an optional sign, then digits up to the first
/// non-digit (`"12abc"` is 12). Returns `None` when no digit follows.
/// Overlong digit runs saturate at the `i64` bounds.
pub fn parse_level(raw: &str) -> Option<i64> {
    let s = raw.trim_start_matches(is_level_space);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].bytes().fold(0i64, |acc, b| {
        let d = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    });
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_absent_level_defaults_to_root() {
        let state = NavigationState::from_query("");
        assert_eq!(state, NavigationState::default());
        assert_eq!(state.level, 0);
    }

    #[test]
    fn test_non_numeric_level_defaults_to_root() {
        assert_eq!(NavigationState::from_query("?level=abc").level, 0);
        assert_eq!(NavigationState::from_query("?level=").level, 0);
        assert_eq!(NavigationState::from_query("?level=-").level, 0);
    }

    #[test]
    fn test_child_query() {
        let state = NavigationState::from_query("?level=1&parent=root&node=5");
        assert_eq!(state.level, 1);
        assert_eq!(state.parent.as_deref(), Some("root"));
        assert_eq!(state.node.as_deref(), Some("5"));
    }

    #[test]
    fn test_leading_integer_semantics() {
        assert_eq!(parse_level("12abc"), Some(12));
        assert_eq!(parse_level("  -3"), Some(-3));
        assert_eq!(parse_level("+7"), Some(7));
        assert_eq!(parse_level("0x10"), Some(0));
        assert_eq!(parse_level("1.9"), Some(1));
        assert_eq!(parse_level("x1"), None);
    }

    #[test]
    fn test_leading_space_matches_parse_int() {
        assert_eq!(parse_level("\u{feff}1"), Some(1));
        assert_eq!(parse_level("\u{a0}1"), Some(1));
        assert_eq!(parse_level("\u{2028}\t 1"), Some(1));
        assert_eq!(parse_level("\u{85}1"), None);

        let state = NavigationState::from_pairs([("level", "\u{feff}1"), ("parent", "root")]);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_overlong_level_saturates() {
        assert_eq!(parse_level("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_level("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_empty_values_are_absent() {
        let state = NavigationState::from_query("level=1&parent=&node=");
        assert_eq!(state.parent, None);
        assert_eq!(state.node, None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let state = NavigationState::from_query("level=1&level=0&node=2&node=9");
        assert_eq!(state.level, 1);
        assert_eq!(state.node.as_deref(), Some("2"));
    }

    #[test]
    fn test_unknown_keys_and_bare_keys_ignored() {
        let state = NavigationState::from_query("?utm=x&parent&level=1");
        assert_eq!(state.level, 1);
        assert_eq!(state.parent, None);
    }

    #[test]
    fn test_node_is_not_validated() {
        let state = NavigationState::from_pairs([("node", "not-a-number")]);
        assert_eq!(state.node.as_deref(), Some("not-a-number"));
    }

    proptest! {
        #[test]
        fn prop_any_integer_level_is_kept(level in any::<i64>()) {
            let state = NavigationState::from_pairs([("level", level.to_string())]);
            prop_assert_eq!(state.level, level);
        }

        #[test]
        fn prop_digits_then_garbage(n in 0i64..1_000_000, tail in "[a-zA-Z.]{0,8}") {
            prop_assert_eq!(parse_level(&format!("{}{}", n, tail)), Some(n));
        }

        #[test]
        fn prop_no_leading_digit_is_root(raw in "[a-zA-Z_][a-zA-Z0-9_]{0,10}") {
            prop_assert_eq!(NavigationState::from_pairs([("level", raw)]).level, 0);
        }
    }
}
