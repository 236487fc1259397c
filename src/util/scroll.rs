//! Window scrolling and body scroll-lock helpers.
//!
//! Browser-only: every function needs a live `window`. Outside the `hydrate`
//! build these are inert no-ops so components compile for SSR.

/// CSS class applied to `<body>` while the mobile menu is open.
#[cfg(feature = "hydrate")]
const MENU_OPEN_CLASS: &str = "menu-open";

/// Attach a window scroll listener reporting the vertical offset on every
/// scroll event. The listener stays installed for the page's lifetime.
pub fn bind_scroll_listener(on_scroll: impl Fn(f64) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let listener = Closure::<dyn FnMut()>::new(move || {
            if let Some(window) = web_sys::window() {
                on_scroll(window.scroll_y().unwrap_or(0.0));
            }
        });
        let _ = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        listener.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_scroll;
    }
}

/// Smooth-scroll the window back to the origin.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smooth-scroll the element with the given id into view. Empty target ids
/// (a bare `#` href) are ignored, as are ids with no matching element.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if id.is_empty() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(target) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Apply or remove the scroll-lock class on `<body>` while the mobile menu
/// is open.
pub fn set_body_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            if locked {
                let _ = class_list.add_1(MENU_OPEN_CLASS);
            } else {
                let _ = class_list.remove_1(MENU_OPEN_CLASS);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
