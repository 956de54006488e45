//! Thin wrappers over window/document calls used by the components.
//!
//! Failures are logged to the console and otherwise ignored; none of them
//! should take the page down.

/// `prefers-color-scheme: dark` media query result
pub fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Add or remove the `dark` class on `<html>`.
pub fn set_dark_class(is_dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force("dark", is_dark) {
        web_sys::console::warn_1(&format!("Failed to toggle dark class: {e:?}").into());
    }
}

/// Stop the page behind an overlay from scrolling.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };

    let value = if locked { "hidden" } else { "unset" };
    if let Err(e) = body.style().set_property("overflow", value) {
        web_sys::console::warn_1(&format!("Failed to set body overflow: {e:?}").into());
    }
}

/// Open `url` in a new browsing context. Returns false if the browser refused.
pub fn open_in_new_tab(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => true,
        Ok(None) => {
            web_sys::console::warn_1(&"window.open was blocked".into());
            false
        }
        Err(e) => {
            web_sys::console::error_1(&format!("window.open failed: {e:?}").into());
            false
        }
    }
}

/// Modal alert, used for geolocation failures.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Vertical scroll offset of the page
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}
