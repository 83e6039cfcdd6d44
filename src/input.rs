use egui::{Context, PointerButton, Pos2, Vec2};

use crate::canvas::Point;

/// A primary-button pointer event in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Button went down
    PointerDown { position: Point },
    /// Pointer moved while the button is held
    PointerMove { position: Point },
    /// Button came up
    PointerUp { position: Point },
}

impl InputEvent {
    pub fn position(&self) -> Point {
        match self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerMove { position }
            | InputEvent::PointerUp { position } => *position,
        }
    }
}

/// Converts a window position into canvas coordinates by removing the
/// offset of the chrome above and beside the canvas
pub fn to_canvas_local(pos: Pos2, canvas_offset: Vec2) -> Point {
    Point::from(pos - canvas_offset)
}

/// Handles converting raw egui input into canvas-local InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// Whether the current press started over the canvas
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads this frame's pointer input.
    ///
    /// `canvas_offset` is the window position of the canvas origin;
    /// `press_allowed` is false when the pointer is over other UI, so clicks
    /// on menus do not paint. Once a press started on the canvas, moves and
    /// the release are delivered even if the pointer wanders off.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_offset: Vec2,
        press_allowed: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let hover = pointer.latest_pos();

            if pointer.button_pressed(PointerButton::Primary) && press_allowed {
                if let Some(pos) = pointer.press_origin().or(hover) {
                    self.pressed_on_canvas = true;
                    events.push(InputEvent::PointerDown {
                        position: to_canvas_local(pos, canvas_offset),
                    });
                    self.last_pointer_pos = Some(pos);
                }
            }

            if self.pressed_on_canvas {
                if let Some(pos) = hover {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove {
                            position: to_canvas_local(pos, canvas_offset),
                        });
                        self.last_pointer_pos = Some(pos);
                    }
                }

                if pointer.button_released(PointerButton::Primary) {
                    let pos = hover.or(self.last_pointer_pos).unwrap_or_default();
                    events.push(InputEvent::PointerUp {
                        position: to_canvas_local(pos, canvas_offset),
                    });
                    self.pressed_on_canvas = false;
                    self.last_pointer_pos = None;
                }
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_chrome_offset_is_removed() {
        let local = to_canvas_local(pos2(40.0, 65.5), vec2(0.0, 24.0));
        assert_eq!(local, Point::new(40, 41));
    }

    #[test]
    fn test_event_position() {
        let event = InputEvent::PointerMove {
            position: Point::new(3, 4),
        };
        assert_eq!(event.position(), Point::new(3, 4));
    }
}
