//! State machine for the bottom sheet widget
//!
//! The sheet owns its vertical offset and transient drag state; the
//! visibility flag is owned by the host and passed in as `&mut bool`. The
//! sheet never assumes exclusive ownership of the flag: it only reads it to
//! resync and writes `false` through it to request dismissal.

use super::config::SheetConfig;
use super::message::BottomSheetMessage;

/// Interaction phase of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPhase {
    /// Off screen, not drawn
    Hidden,
    /// At rest, fully visible
    Shown,
    /// Offset is tracking an active pointer drag
    Dragging,
}

/// State for a bottom sheet
///
/// `offset` is the card's displacement from its resting position: 0.0 when
/// fully shown, `config.hidden_offset` when fully hidden. It is only written
/// by the drag handler, the hide path, and the visibility resync (and the
/// resync is suppressed while a drag is live, so an external show can never
/// fight the user's finger).
#[derive(Debug, Clone)]
pub struct BottomSheetState {
    config: SheetConfig,
    offset: f32,
    /// A press began on the card window and has not been released
    pressed: bool,
    /// Vertical position of the first movement event after the press
    drag_origin: Option<f32>,
    /// True from the first downward movement until release or dismissal
    dragging: bool,
}

impl Default for BottomSheetState {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

impl BottomSheetState {
    /// Create a new sheet state, initially hidden
    pub fn new(config: SheetConfig) -> Self {
        let offset = config.hidden_offset;
        Self {
            config,
            offset,
            pressed: false,
            drag_origin: None,
            dragging: false,
        }
    }

    /// The sheet's configuration
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Current vertical displacement from the resting position
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether a drag is currently in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a press on the card window is currently held
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Current interaction phase
    pub fn phase(&self) -> SheetPhase {
        if self.dragging {
            SheetPhase::Dragging
        } else if self.offset == 0.0 {
            SheetPhase::Shown
        } else {
            SheetPhase::Hidden
        }
    }

    /// Apply a widget message
    ///
    /// `is_showing` is the host-owned visibility flag. The sheet writes
    /// `false` through it when the user dismisses (backdrop press or a drag
    /// past a dismiss threshold); it never writes `true`.
    ///
    /// Hosts that flip the flag themselves should feed the new value back as
    /// `VisibilityChanged` on the next update tick so the offset resyncs
    /// outside the current update pass.
    pub fn update(&mut self, message: BottomSheetMessage, is_showing: &mut bool) {
        match message {
            BottomSheetMessage::DragStarted => {
                self.pressed = true;
                self.drag_origin = None;
            }
            BottomSheetMessage::DragMoved(y) => self.drag_moved(y, is_showing),
            BottomSheetMessage::DragEnded => self.drag_ended(),
            BottomSheetMessage::BackdropPressed => {
                log::debug!("sheet dismissed by backdrop press");
                self.hide(is_showing);
            }
            BottomSheetMessage::VisibilityChanged(showing) => self.sync_visibility(showing),
        }
    }

    /// Handle a pointer movement at vertical position `y`
    ///
    /// The first movement after a press records the drag origin; the drag
    /// proper starts on the first movement below that origin. While dragging,
    /// the offset tracks the pointer 1:1 until either dismiss condition is
    /// crossed: travel from the origin reaching `minimum_drag_distance`, or
    /// the pointer reaching the absolute `dismiss_position`.
    fn drag_moved(&mut self, y: f32, is_showing: &mut bool) {
        if !self.pressed {
            // Hover movement with no press; not part of a gesture
            return;
        }

        let origin = match self.drag_origin {
            Some(origin) => origin,
            None => {
                self.drag_origin = Some(y);
                return;
            }
        };

        if !self.dragging {
            if y <= origin {
                // Only downward translation starts a drag
                return;
            }
            self.dragging = true;
        }

        let travel = (y - origin).abs();
        if travel >= self.config.minimum_drag_distance || y >= self.config.dismiss_position {
            log::debug!(
                "sheet dismissed by drag (travel {:.1}, position {:.1})",
                travel,
                y
            );
            self.hide(is_showing);
        } else {
            self.offset = y.clamp(0.0, self.config.hidden_offset);
        }
    }

    /// Handle pointer release: snap back if a drag was live
    fn drag_ended(&mut self) {
        if self.dragging {
            self.offset = 0.0;
        }
        self.clear_drag();
    }

    /// Force the sheet off screen and request dismissal from the host
    fn hide(&mut self, is_showing: &mut bool) {
        self.offset = self.config.hidden_offset;
        self.clear_drag();
        *is_showing = false;
    }

    /// Resync the offset with the host's visibility flag
    ///
    /// Skipped when the flag becomes true during an active drag: resyncing
    /// to 0 would yank the card out from under the pointer. Every other
    /// combination resyncs immediately. A resync to hidden also clears any
    /// live drag, since the card unmounts with it.
    fn sync_visibility(&mut self, showing: bool) {
        if showing {
            if self.dragging {
                return;
            }
            self.offset = 0.0;
        } else {
            self.offset = self.config.hidden_offset;
            self.clear_drag();
        }
    }

    fn clear_drag(&mut self) {
        self.pressed = false;
        self.drag_origin = None;
        self.dragging = false;
    }
}
