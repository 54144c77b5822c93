//! Bottom Sheet Widget
//!
//! A reusable card overlay that slides up from the bottom of the window.
//! Provides:
//! - A dimmed, tappable backdrop that requests dismissal
//! - A card with a drag handle and arbitrary caller content
//! - Drag-to-dismiss: a downward drag past a distance threshold (or past an
//!   absolute position near the card top) hides the sheet
//! - Snap back: releasing before either threshold returns the card to rest
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Backdrop (dim fill, press → dismiss)        │
//! │                                              │
//! │                                              │
//! │  ┌────────────────────────────────────────┐  │
//! │  │              ────────       ← handle   │  │
//! │  │                                        │  │
//! │  │         caller content                 │  │
//! │  │                                        │  │ ↕ drag
//! │  └────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Visibility is owned by the host: the sheet reads the host's boolean and
//! writes `false` back through `&mut bool` when the user dismisses it. The
//! host is expected to resync the widget with
//! `BottomSheetMessage::VisibilityChanged` on the update tick after it flips
//! the flag itself (see `BottomSheetState::update`).

pub mod config;
mod message;
mod state;
mod view;

pub use config::SheetConfig;
pub use message::BottomSheetMessage;
pub use state::{BottomSheetState, SheetPhase};
pub use view::bottom_sheet;

/// Default backdrop dim opacity (0.0 - 1.0)
pub const DEFAULT_OUT_OF_FOCUS_OPACITY: f32 = 0.7;

/// Default downward travel, in pixels, required to dismiss the sheet
pub const DEFAULT_MINIMUM_DRAG_DISTANCE: f32 = 150.0;

/// Default absolute pointer position (card-window coordinates) that
/// dismisses the sheet regardless of total travel
pub const DEFAULT_DISMISS_POSITION: f32 = 200.0;

/// Default height of the sheet card in pixels
pub const DEFAULT_SHEET_HEIGHT: f32 = 320.0;

/// Default fully-hidden offset; matches the window height so the card is
/// guaranteed to sit past the bottom edge
pub const DEFAULT_HIDDEN_OFFSET: f32 = 800.0;
