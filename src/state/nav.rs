#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Scroll offset past which the back-to-top button becomes visible.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// State for the navbar, mobile menu, and back-to-top button.
///
/// The menu flag and the two scroll-derived flags are independent; scrolling
/// never opens or closes the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Activating any nav link closes the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Update scroll-derived flags from the window's vertical offset.
    /// Both thresholds are strict.
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.navbar_scrolled = offset_y > NAVBAR_SCROLLED_THRESHOLD_PX;
        self.back_to_top_visible = offset_y > BACK_TO_TOP_THRESHOLD_PX;
    }
}
