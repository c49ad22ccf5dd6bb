use shared::Theme;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("No document element, theme not applied");
        return;
    };

    if let Err(e) = root.set_attribute("data-theme", &theme.to_string()) {
        log::error!("Failed to set theme attribute: {:?}", e);
    }
}

// Smooth-scrolls the element into the middle of the viewport
pub fn scroll_into_view(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
