//! Messages for the bottom sheet widget

/// Messages emitted by bottom sheet interactions
///
/// Hosts wrap these in their own message type via the callback closure passed
/// to [`bottom_sheet`](super::bottom_sheet) and forward them to
/// [`BottomSheetState::update`](super::BottomSheetState::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BottomSheetMessage {
    /// A press began on the card window
    DragStarted,

    /// The pointer moved to a vertical position, in card-window coordinates
    /// (0.0 at the card's resting top edge)
    DragMoved(f32),

    /// The pointer was released
    DragEnded,

    /// The backdrop was pressed
    BackdropPressed,

    /// The host's visibility flag changed; carries the new value
    VisibilityChanged(bool),
}
