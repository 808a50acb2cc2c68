/// Window-side state that the render workers never see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiAppState {
    pub overlay_visible: bool,
    /// Last window pixel under the cursor, cleared when it leaves the window.
    pub cursor: Option<(u32, u32)>,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self {
            overlay_visible: true,
            cursor: None,
        }
    }
}

impl GuiAppState {
    pub fn toggle_overlay(&mut self) {
        self.overlay_visible = !self.overlay_visible;
    }

    pub fn set_cursor(&mut self, cursor: Option<(u32, u32)>) {
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_overlay_without_cursor() {
        let state = GuiAppState::default();

        assert!(state.overlay_visible);
        assert_eq!(state.cursor, None);
    }

    #[test]
    fn test_toggle_overlay_flips_visibility() {
        let mut state = GuiAppState::default();

        state.toggle_overlay();
        assert!(!state.overlay_visible);

        state.toggle_overlay();
        assert!(state.overlay_visible);
    }

    #[test]
    fn test_set_cursor_replaces_last_position() {
        let mut state = GuiAppState::default();

        state.set_cursor(Some((3, 4)));
        assert_eq!(state.cursor, Some((3, 4)));

        state.set_cursor(None);
        assert_eq!(state.cursor, None);
    }
}
