//! Configuration for the bottom sheet widget
//!
//! All values are fixed for the lifetime of a `BottomSheetState`; construct a
//! new state to change them.

use iced::Color;

use crate::theme;

use super::{
    DEFAULT_DISMISS_POSITION, DEFAULT_HIDDEN_OFFSET, DEFAULT_MINIMUM_DRAG_DISTANCE,
    DEFAULT_OUT_OF_FOCUS_OPACITY, DEFAULT_SHEET_HEIGHT,
};

/// Bottom sheet configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Card background fill
    pub background: Color,
    /// Backdrop dim opacity (0.0 - 1.0)
    pub out_of_focus_opacity: f32,
    /// Downward travel from the drag origin, in pixels, that dismisses
    pub minimum_drag_distance: f32,
    /// Absolute pointer position (card-window coordinates) that dismisses
    /// even when total travel is small
    pub dismiss_position: f32,
    /// Height of the card in pixels
    pub sheet_height: f32,
    /// Offset at which the card is fully off screen (the window height)
    pub hidden_offset: f32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            background: theme::CARD_BACKGROUND,
            out_of_focus_opacity: DEFAULT_OUT_OF_FOCUS_OPACITY,
            minimum_drag_distance: DEFAULT_MINIMUM_DRAG_DISTANCE,
            dismiss_position: DEFAULT_DISMISS_POSITION,
            sheet_height: DEFAULT_SHEET_HEIGHT,
            hidden_offset: DEFAULT_HIDDEN_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SheetConfig::default();
        assert_eq!(config.out_of_focus_opacity, 0.7);
        assert_eq!(config.minimum_drag_distance, 150.0);
        assert_eq!(config.dismiss_position, 200.0);
        assert!(config.hidden_offset >= config.sheet_height);
    }
}
