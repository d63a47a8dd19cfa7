//! DOM bindings
//!
//! Applies a `PagePlan` to the host page. Element lookups are fallible and
//! lazy: an element is only looked up when the plan needs it, and the first
//! failure stops the rest of the plan.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, MouseEvent};

use crate::action::Action;
use crate::cards::{Card, CardContainer};
use crate::consts::*;
use crate::controller::{ButtonPlan, DisabledChange, PagePlan, PageStep};
use crate::error::{NavError, Result};
use crate::nav::{NavigationState, View};

/// Handle to the current document
pub struct Page {
    document: Document,
    pathname: String,
}

impl Page {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(NavError::NoWindow)?;
        let document = window.document().ok_or(NavError::NoDocument)?;
        let pathname = window.location().pathname()?;
        Ok(Self { document, pathname })
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Look up a required element by id
    pub fn element(&self, id: &'static str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or(NavError::MissingElement { id })
    }

    pub fn button(&self, id: &'static str) -> Result<HtmlButtonElement> {
        self.element(id)?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| NavError::WrongElement {
                id,
                expected: "button",
            })
    }

    /// Apply a plan step by step; the first failing step stops the rest
    pub fn apply(&self, plan: &PagePlan) -> Result<()> {
        for step in plan.steps() {
            match step {
                PageStep::Title(title) => {
                    self.element(ID_PAGE_TITLE)?.set_text_content(Some(title));
                }
                PageStep::Cards(cards) => {
                    let element = self.element(ID_CARDS_CONTAINER)?;
                    let mut container = DomContainer::new(self.document.clone(), element);
                    cards.render_into(&mut container)?;
                    log::debug!("Rendered {} cards", cards.count);
                }
                PageStep::Button(button, button_plan) => {
                    apply_button(&self.button(button.element_id())?, button_plan)?;
                }
            }
        }
        Ok(())
    }
}

/// Cards container element
pub struct DomContainer {
    document: Document,
    element: Element,
}

impl DomContainer {
    pub fn new(document: Document, element: Element) -> Self {
        Self { document, element }
    }

    fn labelled_div(&self, class: &str, text: &str) -> Result<Element> {
        let div = self.document.create_element("div")?;
        div.set_class_name(class);
        div.set_text_content(Some(text));
        Ok(div)
    }
}

impl CardContainer for DomContainer {
    type Error = NavError;

    fn clear(&mut self) -> Result<()> {
        self.element.set_inner_html("");
        Ok(())
    }

    fn append(&mut self, card: Card) -> Result<()> {
        let el = self.document.create_element("div")?;
        el.set_class_name(CLASS_CARD);

        el.append_child(&self.labelled_div(CLASS_CARD_TITLE, &card.title)?)?;
        el.append_child(&self.labelled_div(CLASS_CARD_SUBTITLE, &card.subtitle)?)?;
        el.append_child(&self.labelled_div(CLASS_CARD_FOOTER, card.footer)?)?;

        on_click(&el, card.action)?;
        self.element.append_child(&el)?;
        Ok(())
    }
}

fn apply_button(button: &HtmlButtonElement, plan: &ButtonPlan) -> Result<()> {
    let (disabled, action) = plan.effect();
    match disabled {
        DisabledChange::Keep => {}
        DisabledChange::Set => {
            button.class_list().add_1(CLASS_DISABLED)?;
            button.set_disabled(true);
        }
        DisabledChange::Clear => {
            button.set_disabled(false);
            button.class_list().remove_1(CLASS_DISABLED)?;
        }
    }
    if let Some(action) = action {
        on_click(button, action.clone())?;
    }
    Ok(())
}

/// Attach a click listener that performs `action`. Lives as long as the page.
fn on_click(target: &web_sys::EventTarget, action: Action) -> Result<()> {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        if let Err(e) = action.perform() {
            log::error!("Click action failed ({}): {}", action, e);
        }
    });
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Read the URL, plan the page and apply the plan
pub fn load_page() -> Result<View> {
    let state = NavigationState::read()?;
    let page = Page::current()?;
    let plan = PagePlan::for_state(&state, page.pathname());

    match &plan.view {
        View::Unknown => {
            log::warn!(
                "No page for level={} parent={:?}; leaving page as served",
                state.level,
                state.parent
            );
        }
        View::Child { parent, node } => {
            log::info!("Showing child page (parent={}, node={:?})", parent, node);
            page.apply(&plan)?;
        }
        View::Root => {
            log::info!("Showing root page");
            page.apply(&plan)?;
        }
    }

    Ok(plan.view)
}
