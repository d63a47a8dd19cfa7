//! Page controller
//!
//! Decides, once per page load, what the page shows: the title, the card set
//! and what the forward/backward buttons do. The decision is a plain
//! `PagePlan`; applying it to the DOM happens in `dom`.

use crate::action::Action;
use crate::cards::{CardContainer, render_cards};
use crate::consts::*;
use crate::nav::{NavigationState, View, child_href, root_href};

/// What to do with one navigation button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonPlan {
    /// Leave the markup as it is
    Untouched,
    /// Attach a click action; disabled state is left alone
    Listen(Action),
    /// Clear the disabled class/attribute, then attach a click action
    Enable(Action),
    /// Add the disabled class and attribute
    Disable,
}

/// Change to a button's disabled class and attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledChange {
    Keep,
    /// Add the class, set the attribute
    Set,
    /// Remove the class, clear the attribute
    Clear,
}

impl ButtonPlan {
    /// Disabled-state change and click action this plan applies
    pub fn effect(&self) -> (DisabledChange, Option<&Action>) {
        match self {
            ButtonPlan::Untouched => (DisabledChange::Keep, None),
            ButtonPlan::Listen(action) => (DisabledChange::Keep, Some(action)),
            ButtonPlan::Enable(action) => (DisabledChange::Clear, Some(action)),
            ButtonPlan::Disable => (DisabledChange::Set, None),
        }
    }
}

/// Which navigation button a step targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Forward,
    Backward,
}

impl NavButton {
    pub fn element_id(self) -> &'static str {
        match self {
            NavButton::Forward => ID_BTN_FORWARD,
            NavButton::Backward => ID_BTN_BACKWARD,
        }
    }
}

/// One change to the page, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep<'a> {
    Title(&'a str),
    Cards(&'a CardPlan),
    Button(NavButton, &'a ButtonPlan),
}

/// What clicking card `i` does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardClick {
    /// Open the child page of card `i`
    EnterChild { pathname: String },
    /// Deeper levels don't exist yet; tell the user where they would go
    AnnounceDepth { node: String },
}

impl CardClick {
    pub fn action(&self, index: u32) -> Action {
        match self {
            CardClick::EnterChild { pathname } => Action::Navigate(child_href(pathname, index)),
            CardClick::AnnounceDepth { node } => Action::Alert(format!(
                "This is where you'd go deeper:\nParent node = {}, child index = {}",
                node, index
            )),
        }
    }
}

/// Card set for a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPlan {
    pub count: u32,
    pub title_prefix: String,
    pub subtitle: &'static str,
    pub click: CardClick,
}

impl CardPlan {
    /// Render this set into `container`, replacing whatever it held
    pub fn render_into<C: CardContainer>(&self, container: &mut C) -> Result<(), C::Error> {
        render_cards(
            container,
            self.count,
            &self.title_prefix,
            self.subtitle,
            |i| self.click.action(i),
        )
    }
}

/// Everything a page load changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    pub view: View,
    /// New page title, `None` leaves it as is
    pub title: Option<String>,
    /// Cards to render, `None` leaves the container as is
    pub cards: Option<CardPlan>,
    pub forward: ButtonPlan,
    pub backward: ButtonPlan,
}

impl PagePlan {
    /// Plan the page for `state`, served at `pathname`
    pub fn for_state(state: &NavigationState, pathname: &str) -> Self {
        let view = View::resolve(state);
        Self::for_view(view, pathname)
    }

    pub fn for_view(view: View, pathname: &str) -> Self {
        let node = match &view {
            View::Root => return Self::root(pathname),
            View::Child { node, .. } => node.as_deref().unwrap_or(ABSENT_NODE).to_owned(),
            View::Unknown => return Self::untouched(),
        };

        Self {
            title: Some(format!("Node {} – Child Options", node)),
            cards: Some(CardPlan {
                count: CHILD_CARD_COUNT,
                title_prefix: format!("Child of {}", node),
                subtitle: CHILD_SUBTITLE,
                click: CardClick::AnnounceDepth { node },
            }),
            // No level 2 yet
            forward: ButtonPlan::Disable,
            backward: ButtonPlan::Enable(Action::Navigate(root_href(pathname))),
            view,
        }
    }

    fn root(pathname: &str) -> Self {
        Self {
            view: View::Root,
            title: Some(ROOT_TITLE.to_string()),
            cards: Some(CardPlan {
                count: ROOT_CARD_COUNT,
                title_prefix: ROOT_CARD_PREFIX.to_string(),
                subtitle: ROOT_SUBTITLE,
                click: CardClick::EnterChild {
                    pathname: pathname.to_owned(),
                },
            }),
            // Fixed shortcut into the first branch
            forward: ButtonPlan::Listen(Action::Navigate(child_href(
                pathname,
                FORWARD_SHORTCUT_NODE,
            ))),
            backward: ButtonPlan::Disable,
        }
    }

    /// Plan that changes nothing
    pub fn untouched() -> Self {
        Self {
            view: View::Unknown,
            title: None,
            cards: None,
            forward: ButtonPlan::Untouched,
            backward: ButtonPlan::Untouched,
        }
    }

    /// Changes to make, in order: title, cards, backward, forward.
    /// Untouched parts produce no step.
    pub fn steps(&self) -> Vec<PageStep<'_>> {
        let mut steps = Vec::new();
        if let Some(title) = &self.title {
            steps.push(PageStep::Title(title));
        }
        if let Some(cards) = &self.cards {
            steps.push(PageStep::Cards(cards));
        }
        for (button, plan) in [
            (NavButton::Backward, &self.backward),
            (NavButton::Forward, &self.forward),
        ] {
            if *plan != ButtonPlan::Untouched {
                steps.push(PageStep::Button(button, plan));
            }
        }
        steps
    }

    /// True when applying the plan would leave the page as served
    pub fn is_noop(&self) -> bool {
        self.steps().is_empty()
    }
}
