//! Click effects
//!
//! Handlers never touch the page directly; they produce an `Action` and the
//! platform layer performs it.

/// What a click does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Full page load of `href` (location assignment)
    Navigate(String),
    /// Blocking modal alert
    Alert(String),
}

impl Action {
    /// Perform the action in the browser (WASM only)
    ///
    /// A navigation ends this page; nothing after it is expected to run.
    #[cfg(target_arch = "wasm32")]
    pub fn perform(&self) -> crate::Result<()> {
        let window = web_sys::window().ok_or(crate::NavError::NoWindow)?;
        match self {
            Action::Navigate(href) => {
                log::info!("Navigating to {}", href);
                window.location().set_href(href)?;
            }
            Action::Alert(message) => {
                window.alert_with_message(message)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Navigate(href) => write!(f, "navigate {}", href),
            Action::Alert(message) => write!(f, "alert {:?}", message),
        }
    }
}
