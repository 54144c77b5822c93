//! Shared theme constants for slate UI components
//!
//! Color constants used across overlay widgets. Hosts can override the card
//! fill per sheet via `SheetConfig`; these are the defaults.

use iced::Color;

/// Default card background (light neutral)
pub const CARD_BACKGROUND: Color = Color::from_rgb(0.96, 0.96, 0.95);

/// Drag handle capsule color (translucent black, reads on light fills)
pub const DRAG_HANDLE: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.2);

/// Backdrop dim color at the given opacity
pub fn backdrop_color(opacity: f32) -> Color {
    Color {
        a: opacity.clamp(0.0, 1.0),
        ..Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_opacity_clamped() {
        assert_eq!(backdrop_color(0.7).a, 0.7);
        assert_eq!(backdrop_color(1.5).a, 1.0);
        assert_eq!(backdrop_color(-0.1).a, 0.0);
    }
}
