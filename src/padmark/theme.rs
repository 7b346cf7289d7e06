use crate::model::Theme;

/// Tracks the active theme. Constructed once and owned by the app, never a
/// process-wide singleton; the host applies the class change.
#[derive(Debug)]
pub struct ThemeToggle {
    current: Theme,
}

impl ThemeToggle {
    pub fn new(initial: Theme) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.inverse();
        self.current
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let mut theme = ThemeToggle::default();
        assert_eq!(theme.current(), Theme::Light);
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(theme.toggle(), Theme::Light);
    }
}
