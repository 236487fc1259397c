//! Viewport width for responsive breakpoints.

/// Width assumed when no window exists (SSR); wide enough for the desktop
/// layout, which hydration then corrects.
pub const FALLBACK_WIDTH_PX: f64 = 1280.0;

/// Current inner width of the window.
pub fn width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(FALLBACK_WIDTH_PX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_WIDTH_PX
    }
}

/// Attach a window resize listener reporting the new inner width on every
/// resize event. The listener stays installed for the page's lifetime.
pub fn bind_resize_listener(on_resize: impl Fn(f64) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let listener = Closure::<dyn FnMut()>::new(move || {
            on_resize(width());
        });
        let _ = window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        listener.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_resize;
    }
}
