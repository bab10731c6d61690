//! Mobile hamburger menu.

/// Inline style of one hamburger bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

impl BarStyle {
    const RESET: BarStyle = BarStyle {
        transform: "none",
        opacity: "1",
    };

    pub fn css(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform, self.opacity)
    }
}

/// Open/closed state of the mobile menu.
///
/// Only opens while the viewport is at or below the mobile breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    open: bool,
    breakpoint: f64,
}

impl MenuState {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click. Returns true if the state changed.
    pub fn toggle(&mut self, viewport_width: f64) -> bool {
        if !self.open && viewport_width > self.breakpoint {
            tracing::debug!(viewport_width, "Ignoring menu open on desktop layout");
            return false;
        }
        self.open = !self.open;
        true
    }

    /// Close if open. Returns true if the state changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Widening past the breakpoint force-closes the menu.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        if viewport_width > self.breakpoint {
            self.close()
        } else {
            false
        }
    }

    /// Bar styles for an open (X) or closed (≡) hamburger.
    pub fn bar_styles(open: bool) -> [BarStyle; 3] {
        if open {
            [
                BarStyle {
                    transform: "rotate(45deg) translate(5px, 5px)",
                    opacity: "1",
                },
                BarStyle {
                    transform: "none",
                    opacity: "0",
                },
                BarStyle {
                    transform: "rotate(-45deg) translate(7px, -6px)",
                    opacity: "1",
                },
            ]
        } else {
            [BarStyle::RESET; 3]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_mobile() {
        let mut menu = MenuState::new(768.0);
        assert!(menu.toggle(400.0));
        assert!(menu.is_open());
        assert!(menu.toggle(400.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_cannot_open_on_desktop() {
        let mut menu = MenuState::new(768.0);
        assert!(!menu.toggle(1024.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resize_past_breakpoint_closes() {
        let mut menu = MenuState::new(768.0);
        menu.toggle(768.0);
        assert!(!menu.on_resize(700.0));
        assert!(menu.is_open());
        assert!(menu.on_resize(769.0));
        assert!(!menu.is_open());
        assert!(!menu.on_resize(1200.0));
    }

    #[test]
    fn test_bar_styles() {
        let open = MenuState::bar_styles(true);
        assert_eq!(open[1].opacity, "0");
        assert_eq!(MenuState::bar_styles(false)[0].css(), "transform: none; opacity: 1;");
    }
}
