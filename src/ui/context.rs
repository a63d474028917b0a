/// Display settings shared by the components that draw the page.
///
/// Created once at start-up from config and passed to rendering
/// explicitly; there is no global toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayContext {
    background: bool,
    max_card_tags: usize,
}

impl DisplayContext {
    pub fn new(background: bool, max_card_tags: usize) -> Self {
        Self {
            background,
            max_card_tags,
        }
    }

    pub fn background_enabled(&self) -> bool {
        self.background
    }

    /// Flip the decorative background; returns the new value.
    pub fn toggle_background(&mut self) -> bool {
        self.background = !self.background;
        self.background
    }

    pub fn max_card_tags(&self) -> usize {
        self.max_card_tags
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new(true, 3)
    }
}
