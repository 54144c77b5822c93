//! Reusable overlay widgets for slate applications
//!
//! This crate provides iced widgets for card-style overlays presented on top
//! of an application's main content.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State structs**: Pure data (`BottomSheetState`), updated through a
//!   widget-level message enum
//! - **View functions**: Take state + callbacks, return `Element<Message>`
//! - **Callback closures**: Hosts map `BottomSheetMessage` into their own
//!   message type rather than implementing a trait
//!
//! ## Current Features
//!
//! - **Bottom sheet**: a card that slides up from the bottom edge, dims the
//!   content behind it, and hides on a backdrop press or a downward drag
//! - **Theme constants**: shared colors for card fills and drag affordances

pub mod bottom_sheet;
pub mod theme;

// Re-export commonly used items
pub use theme::CARD_BACKGROUND;

pub use bottom_sheet::{
    bottom_sheet, BottomSheetMessage, BottomSheetState, SheetConfig, SheetPhase,
    // Constants
    DEFAULT_DISMISS_POSITION, DEFAULT_HIDDEN_OFFSET, DEFAULT_MINIMUM_DRAG_DISTANCE,
    DEFAULT_OUT_OF_FOCUS_OPACITY, DEFAULT_SHEET_HEIGHT,
};
