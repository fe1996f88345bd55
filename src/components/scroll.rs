//! Scroll Choreography
//!
//! Smooth-scroll helpers for moving between page sections. Sections are
//! shown and scrolled to in the same click, so the scroll waits a fixed
//! delay for the section to exist in the DOM.

use gloo_timers::callback::Timeout;

/// Delay before scrolling to a freshly shown section
pub const SECTION_SCROLL_DELAY_MS: u32 = 200;

/// Smooth-scroll to the top of the page
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll to the top after `delay_ms`
pub fn scroll_to_top_soon(delay_ms: u32) {
    Timeout::new(delay_ms, scroll_to_top).forget();
}

/// Smooth-scroll to the element with `id` after the section delay
pub fn scroll_to_section_soon(id: &'static str) {
    Timeout::new(SECTION_SCROLL_DELAY_MS, move || {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
    .forget();
}
