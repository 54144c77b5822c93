//! View functions for the bottom sheet widget
//!
//! Built from conventional iced widgets: the backdrop is a `mouse_area` over
//! a dim full-screen container, and the card slides inside a clipped window
//! anchored at the bottom edge (iced has no free translation transform, so
//! the offset is expressed as a spacer above the card).

use iced::widget::{column, container, mouse_area, stack, Space};
use iced::{Alignment, Border, Color, Element, Length, Point};

use crate::theme;

use super::message::BottomSheetMessage;
use super::state::BottomSheetState;

/// Width of the drag handle capsule
const DRAG_HANDLE_WIDTH: f32 = 36.0;

/// Height of the drag handle capsule
const DRAG_HANDLE_HEIGHT: f32 = 5.0;

/// Corner radius of the sheet card
const CARD_CORNER_RADIUS: f32 = 10.0;

/// Spacing between the handle, the caller content, and the footer gap
const CARD_SPACING: f32 = 14.0;

/// Empty space at the bottom of the card
const CARD_FOOTER_HEIGHT: f32 = 20.0;

/// Render the bottom sheet overlay
///
/// Returns an empty element while `is_showing` is false: nothing is mounted
/// and the backdrop is not hit-testable. Hosts compose the result above their
/// base content with `stack!`.
///
/// # Arguments
/// * `state` - Sheet state owned by the host
/// * `is_showing` - The host's visibility flag
/// * `content` - Arbitrary content rendered inside the card
/// * `on_event` - Maps widget messages into the host's message type
///
/// # Example
/// ```ignore
/// stack![
///     base_content,
///     bottom_sheet(&self.sheet, self.show_sheet, sheet_body, Message::Sheet),
/// ]
/// ```
pub fn bottom_sheet<'a, Message: Clone + 'a>(
    state: &BottomSheetState,
    is_showing: bool,
    content: Element<'a, Message>,
    on_event: impl Fn(BottomSheetMessage) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    if !is_showing {
        return Space::new().into();
    }

    let backdrop = backdrop(
        state.config().out_of_focus_opacity,
        on_event(BottomSheetMessage::BackdropPressed),
    );
    let sheet = sheet_layer(state, content, on_event);

    stack![backdrop, sheet].into()
}

/// Full-screen dim layer that requests dismissal on press
fn backdrop<'a, Message: Clone + 'a>(opacity: f32, on_press: Message) -> Element<'a, Message> {
    let fill = theme::backdrop_color(opacity);

    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(fill.into()),
                ..Default::default()
            }),
    )
    .on_press(on_press)
    .into()
}

/// The sliding card inside its bottom-anchored window
///
/// The window keeps a fixed position so pointer coordinates stay relative to
/// the card's resting top edge while the card moves under the pointer.
fn sheet_layer<'a, Message: Clone + 'a>(
    state: &BottomSheetState,
    content: Element<'a, Message>,
    on_event: impl Fn(BottomSheetMessage) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    let config = state.config();
    let offset = state.offset().clamp(0.0, config.sheet_height);

    let card = card(config.background, config.sheet_height, content);

    let window = container(column![
        Space::new().height(Length::Fixed(offset)),
        card,
    ])
    .width(Length::Fill)
    .height(Length::Fixed(config.sheet_height))
    .clip(true);

    let mut area = mouse_area(window)
        .on_press(on_event(BottomSheetMessage::DragStarted))
        .on_release(on_event(BottomSheetMessage::DragEnded));

    // Only track pointer movement while a press is held
    if state.is_pressed() {
        let on_move = on_event.clone();
        area = area.on_move(move |point: Point| on_move(BottomSheetMessage::DragMoved(point.y)));
    }

    let top_gap = (config.hidden_offset - config.sheet_height).max(0.0);

    column![Space::new().height(Length::Fixed(top_gap)), area]
        .width(Length::Fill)
        .into()
}

/// The card itself: drag handle, caller content, footer gap
fn card<'a, Message: 'a>(
    background: Color,
    height: f32,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let body = column![
        drag_handle(),
        content,
        Space::new().height(Length::Fixed(CARD_FOOTER_HEIGHT)),
    ]
    .spacing(CARD_SPACING)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([8, 0])
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: CARD_CORNER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Capsule affordance hinting that the card can be dragged
fn drag_handle<'a, Message: 'a>() -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(DRAG_HANDLE_WIDTH))
        .height(Length::Fixed(DRAG_HANDLE_HEIGHT))
        .style(|_theme| container::Style {
            background: Some(theme::DRAG_HANDLE.into()),
            border: Border {
                radius: (DRAG_HANDLE_HEIGHT / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
