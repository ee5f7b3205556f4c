use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::state::navigation::AnchorScroller;

/// Scrolls to elements of the live document by id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentAnchors;

impl AnchorScroller for DocumentAnchors {
    fn scroll_to(&self, anchor_id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor_id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Current vertical scroll offset of the window, 0 when unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
