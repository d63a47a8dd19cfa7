//! Card renderer
//!
//! A card set is rebuilt from scratch on every render; the previous cards are
//! dropped, never diffed.

use std::convert::Infallible;

use crate::action::Action;
use crate::consts::CARD_FOOTER;

/// One clickable card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// 1-based position in the set
    pub index: u32,
    /// `"{prefix} {index}"`
    pub title: String,
    /// Same text for every card in the set
    pub subtitle: String,
    /// Static hint
    pub footer: &'static str,
    /// Effect of clicking the card
    pub action: Action,
}

/// Something cards can be rendered into
pub trait CardContainer {
    type Error;

    /// Remove all existing content
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Append one card (with its click handler) at the end
    fn append(&mut self, card: Card) -> Result<(), Self::Error>;
}

/// In-memory container, used by the native preview and tests
impl CardContainer for Vec<Card> {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        Vec::clear(self);
        Ok(())
    }

    fn append(&mut self, card: Card) -> Result<(), Infallible> {
        self.push(card);
        Ok(())
    }
}

/// Replace the contents of `container` with `count` cards
///
/// Card `i` (1-based) is titled `"{title_prefix} {i}"` and clicking it
/// performs `on_click(i)`. A count of 0 leaves the container empty.
pub fn render_cards<C, F>(
    container: &mut C,
    count: u32,
    title_prefix: &str,
    subtitle: &str,
    on_click: F,
) -> Result<(), C::Error>
where
    C: CardContainer,
    F: Fn(u32) -> Action,
{
    container.clear()?;

    for index in 1..=count {
        container.append(Card {
            index,
            title: format!("{} {}", title_prefix, index),
            subtitle: subtitle.to_owned(),
            footer: CARD_FOOTER,
            action: on_click(index),
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alert_index(i: u32) -> Action {
        Action::Alert(i.to_string())
    }

    #[test]
    fn test_titles_are_one_based() {
        let mut cards: Vec<Card> = Vec::new();
        render_cards(&mut cards, 3, "Root Card", "sub", alert_index).unwrap();

        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Root Card 1", "Root Card 2", "Root Card 3"]);
        assert!(cards.iter().all(|c| c.subtitle == "sub"));
        assert!(cards.iter().all(|c| c.footer == "Click to navigate deeper"));
    }

    #[test]
    fn test_click_receives_card_index() {
        let mut cards: Vec<Card> = Vec::new();
        render_cards(&mut cards, 4, "Card", "", alert_index).unwrap();
        for card in &cards {
            assert_eq!(card.action, Action::Alert(card.index.to_string()));
        }
    }

    #[test]
    fn test_rerender_replaces_previous_set() {
        let mut cards: Vec<Card> = Vec::new();
        render_cards(&mut cards, 10, "Root Card", "a", alert_index).unwrap();
        render_cards(&mut cards, 3, "Child of 2", "b", alert_index).unwrap();

        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.title.starts_with("Child of 2 ")));
    }

    #[test]
    fn test_zero_count_empties_container() {
        let mut cards: Vec<Card> = Vec::new();
        render_cards(&mut cards, 2, "Card", "", alert_index).unwrap();
        render_cards(&mut cards, 0, "Card", "", alert_index).unwrap();
        assert!(cards.is_empty());
    }

    proptest! {
        #[test]
        fn prop_rerender_leaves_exactly_count(first in 0u32..50, second in 0u32..50) {
            let mut cards: Vec<Card> = Vec::new();
            render_cards(&mut cards, first, "A", "", alert_index).unwrap();
            render_cards(&mut cards, second, "B", "", alert_index).unwrap();
            prop_assert_eq!(cards.len(), second as usize);
            prop_assert!(cards.iter().enumerate().all(|(i, c)| c.index == i as u32 + 1));
        }
    }
}
