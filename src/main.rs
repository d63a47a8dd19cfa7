//! Tree Nav entry point
//!
//! In the browser: sets up logging and runs the page controller once the
//! document has loaded. Natively: prints what a given query would render.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use tree_nav::Settings;

    pub fn run() {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        console_log::init_with_level(settings.log_level.to_level()).expect("Failed to init logger");

        log::info!("Tree Nav starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document; nothing to render");
            return;
        };

        if document.ready_state() == "loading" {
            let closure = Closure::once(move |_event: web_sys::Event| on_content_loaded());
            if let Err(e) = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            ) {
                log::error!("Failed to listen for DOMContentLoaded: {:?}", e);
            }
            closure.forget();
        } else {
            on_content_loaded();
        }
    }

    fn on_content_loaded() {
        match tree_nav::dom::load_page() {
            Ok(view) => log::info!("Page ready ({})", view.as_str()),
            Err(e) => log::error!("Page setup aborted: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tree_nav::{Card, LogLevel, NavigationState, PagePlan, Settings};

    // Usage: tree-nav [QUERY] [LOG_LEVEL]
    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_default();
    let log_level = args
        .next()
        .and_then(|s| LogLevel::from_str(&s))
        .unwrap_or(Settings::load().log_level);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level.as_str()))
        .init();

    let state = NavigationState::from_query(&query);
    log::info!("Previewing {:?} -> {:?}", query, state);

    let plan = PagePlan::for_state(&state, "/");
    println!("view:     {}", plan.view.as_str());
    if plan.is_noop() {
        println!("(page left as served)");
        return;
    }

    if let Some(title) = &plan.title {
        println!("title:    {}", title);
    }
    println!("forward:  {:?}", plan.forward);
    println!("backward: {:?}", plan.backward);

    if let Some(cards) = &plan.cards {
        let mut rendered: Vec<Card> = Vec::new();
        let Ok(()) = cards.render_into(&mut rendered);
        for card in &rendered {
            println!("  [{}] {} | {} -> {}", card.index, card.title, card.subtitle, card.action);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
