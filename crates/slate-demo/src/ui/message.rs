//! Application messages

use slate_widgets::BottomSheetMessage;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the sheet (button on the base screen)
    OpenSheet,
    /// Hide the sheet (close button inside the sheet content)
    CloseSheet,
    /// Bottom sheet widget events
    Sheet(BottomSheetMessage),
}
