pub const DRAG_AMPLIFICATION: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputModality {
    Mouse,
    Touch,
}

impl InputModality {
    pub fn from_event_type(value: &str) -> Option<Self> {
        match value {
            "mousedown" | "mousemove" | "mouseup" => Some(InputModality::Mouse),
            "touchstart" | "touchmove" | "touchend" | "touchcancel" => Some(InputModality::Touch),
            _ => None,
        }
    }

    pub fn move_event(self) -> &'static str {
        match self {
            InputModality::Mouse => "mousemove",
            InputModality::Touch => "touchmove",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub start_x: f64,
    pub movement: f64,
    pub committed_offset: f64,
    pub live_position: f64,
}

impl DragState {
    pub fn reset(&mut self, start_x: f64) {
        self.start_x = start_x;
        self.movement = 0.0;
        self.live_position = self.committed_offset;
    }

    pub fn track(&mut self, pointer_x: f64) -> f64 {
        self.movement = (self.start_x - pointer_x) * DRAG_AMPLIFICATION;
        self.live_position = self.committed_offset - self.movement;
        self.live_position
    }

    pub fn commit(&mut self) {
        self.committed_offset = self.live_position;
    }
}
