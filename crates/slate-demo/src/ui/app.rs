//! Demo application state and views
//!
//! The app owns the canonical `show_sheet` flag and the sheet's widget
//! state. Flipping the flag here is followed by a deferred
//! `VisibilityChanged` resync on the next update tick, so the offset write
//! happens outside the update pass that changed the flag.

use iced::widget::{button, column, container, row, stack, text, Space};
use iced::{Alignment, Color, Element, Length, Task, Theme};

use slate_widgets::{bottom_sheet, BottomSheetMessage, BottomSheetState};

use crate::config;
use crate::ui::message::Message;

/// Demo window size
pub const WINDOW_WIDTH: f32 = 480.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

/// Demo application state
pub struct DemoApp {
    /// Canonical visibility flag, shared with the sheet
    show_sheet: bool,
    /// Sheet widget state (offset + drag tracking)
    sheet: BottomSheetState,
}

impl DemoApp {
    pub fn new() -> (Self, Task<Message>) {
        let config_path = config::default_config_path();
        let config = config::load_config(&config_path);

        let app = Self {
            show_sheet: false,
            sheet: BottomSheetState::new(config.sheet_config(WINDOW_HEIGHT)),
        };

        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenSheet => {
                if self.show_sheet {
                    return Task::none();
                }
                self.show_sheet = true;
                // Resync the offset on the next tick, not inside this pass
                Task::perform(async {}, |_| {
                    Message::Sheet(BottomSheetMessage::VisibilityChanged(true))
                })
            }
            Message::CloseSheet => {
                if !self.show_sheet {
                    return Task::none();
                }
                self.show_sheet = false;
                Task::perform(async {}, |_| {
                    Message::Sheet(BottomSheetMessage::VisibilityChanged(false))
                })
            }
            Message::Sheet(msg) => {
                let was_showing = self.show_sheet;
                self.sheet.update(msg, &mut self.show_sheet);
                if was_showing && !self.show_sheet {
                    log::info!("sheet dismissed itself");
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let base = container(
            column![
                text("Custom Info Sheet").size(32),
                button(text("Open Sheet")).on_press(Message::OpenSheet),
            ]
            .spacing(20)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

        let sheet = bottom_sheet(
            &self.sheet,
            self.show_sheet,
            self.sheet_content(),
            Message::Sheet,
        );

        stack![base, sheet].into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Content rendered inside the sheet card
    fn sheet_content(&self) -> Element<'_, Message> {
        let close_btn = button(text("×").size(18))
            .on_press(Message::CloseSheet)
            .style(button::text);

        let header = row![
            close_btn,
            Space::new().width(Length::Fill),
            text("Why do I need to connect to do the job?").size(16),
            Space::new().width(Length::Fill),
        ]
        .align_y(Alignment::Center)
        .width(Length::Fill);

        let body = text(
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Aliquam a \
             tempor nibh. Morbi porttitor leo nulla, vitae fringilla mauris \
             molestie vel. Fusce lobortis, quam id luctus rutrum, urna sem \
             tincidunt augue, sit amet varius diam odio quis massa.",
        )
        .size(13)
        .color(Color::from_rgb(0.45, 0.45, 0.45));

        column![header, body]
            .spacing(16)
            .padding([0, 24])
            .width(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use slate_widgets::SheetPhase;

    /// App with default settings, skipping the on-disk config
    fn demo_app() -> DemoApp {
        DemoApp {
            show_sheet: false,
            sheet: BottomSheetState::new(DemoConfig::default().sheet_config(WINDOW_HEIGHT)),
        }
    }

    /// Feed the deferred resync the way the runtime would on the next tick
    fn sync(app: &mut DemoApp) {
        let showing = app.show_sheet;
        let _ = app.update(Message::Sheet(BottomSheetMessage::VisibilityChanged(showing)));
    }

    #[test]
    fn test_open_then_sync_shows_sheet() {
        let mut app = demo_app();
        assert!(!app.show_sheet);

        let _ = app.update(Message::OpenSheet);
        assert!(app.show_sheet);
        // Offset only resyncs on the deferred tick
        assert_eq!(app.sheet.phase(), SheetPhase::Hidden);

        sync(&mut app);
        assert_eq!(app.sheet.phase(), SheetPhase::Shown);
    }

    #[test]
    fn test_close_button_hides_sheet() {
        let mut app = demo_app();
        let _ = app.update(Message::OpenSheet);
        sync(&mut app);

        let _ = app.update(Message::CloseSheet);
        assert!(!app.show_sheet);
        sync(&mut app);
        assert_eq!(app.sheet.phase(), SheetPhase::Hidden);
    }

    #[test]
    fn test_backdrop_press_flips_host_flag() {
        let mut app = demo_app();
        let _ = app.update(Message::OpenSheet);
        sync(&mut app);

        let _ = app.update(Message::Sheet(BottomSheetMessage::BackdropPressed));
        assert!(!app.show_sheet);
        assert_eq!(app.sheet.phase(), SheetPhase::Hidden);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut app = demo_app();
        let _ = app.update(Message::OpenSheet);
        sync(&mut app);
        let _ = app.update(Message::OpenSheet);
        assert!(app.show_sheet);
        assert_eq!(app.sheet.phase(), SheetPhase::Shown);
    }
}
