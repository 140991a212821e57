//! Thin wrappers over browser APIs used by the page chrome.
//!
//! Each function degrades to a log line or a no-op off-wasm so the component
//! tree compiles and behaves sensibly on native builds.

use dioxus::logger::tracing::warn;

/// Shows a blocking browser alert; logs a warning where no alert exists.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    warn!("{message}");
}

/// Smooth-scrolls the element with the given id into view.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_section(_id: &str) {}

/// Reloads the page, returning the widget to its initial state.
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                warn!("page reload failed: {:?}", e);
            }
        }
    }
}
