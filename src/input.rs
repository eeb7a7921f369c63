use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect, Response};

/// Maps between screen space and canvas-local space. Element positions are
/// always stored in canvas-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Screen position of the canvas's top-left corner
    pub origin: Pos2,
    /// Screen pixels per canvas unit
    pub zoom: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            origin: Pos2::ZERO,
            zoom: 1.0,
        }
    }
}

impl CanvasTransform {
    pub fn new(origin: Pos2, zoom: f32) -> Self {
        let zoom = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };
        Self { origin, zoom }
    }

    pub fn to_canvas(&self, screen: Pos2) -> Pos2 {
        Pos2::ZERO + (screen - self.origin) / self.zoom
    }

    pub fn to_screen(&self, canvas: Pos2) -> Pos2 {
        self.origin + canvas.to_vec2() * self.zoom
    }

    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max))
    }
}

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Canvas input in the order it happened within a frame
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the workspace
    PointerDown { location: InputLocation },
    /// Pointer moved while the canvas is tracking it
    PointerMove {
        location: InputLocation,
        /// Whether the primary button is still held
        button_held: bool,
    },
    /// Primary button was released
    PointerUp { location: InputLocation },
    /// Second click of a double click
    DoubleClick { location: InputLocation },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

impl InputEvent {
    pub fn location(&self) -> Option<InputLocation> {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerMove { location, .. }
            | InputEvent::PointerUp { location }
            | InputEvent::DoubleClick { location } => Some(*location),
            InputEvent::KeyDown { .. } => None,
        }
    }
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    pressed_on_canvas: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            pressed_on_canvas: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Reads this frame's input for the workspace widget described by
    /// `response`. Presses that land on another widget are not reported.
    pub fn process_input(&mut self, ctx: &Context, response: &Response) -> Vec<InputEvent> {
        let mut events = Vec::new();
        // Keys typed into a focused text field never reach the canvas
        let keyboard_free = !ctx.wants_keyboard_input();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let pos = pointer.interact_pos().or_else(|| pointer.hover_pos());

            if pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pos {
                    if response.contains_pointer() {
                        self.pressed_on_canvas = true;
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                        });
                    }
                }
            }

            if let Some(pos) = pos {
                if self.pressed_on_canvas && Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                        button_held: pointer.button_down(PointerButton::Primary),
                    });
                }
            }
            self.last_pointer_pos = pos;

            if pointer.button_released(PointerButton::Primary) && self.pressed_on_canvas {
                self.pressed_on_canvas = false;
                let last = pos.or(self.last_pointer_pos).unwrap_or(self.canvas_rect.min);
                events.push(InputEvent::PointerUp {
                    location: self.make_location(last),
                });
            }

            for event in input.raw.events.iter().filter(|_| keyboard_free) {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        if response.double_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(InputEvent::DoubleClick {
                    location: self.make_location(pos),
                });
            }
        }

        events
    }
}
