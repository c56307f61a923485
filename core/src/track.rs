use crate::drag::{DragState, InputModality};
use crate::nav::NavIndex;
use crate::snap::{decide_snap, SnapDecision};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideChange {
    pub previous: usize,
    pub index: usize,
    pub offset: f64,
}

#[derive(Clone, Debug)]
pub struct SlideTrack {
    positions: Vec<f64>,
    nav: NavIndex,
    drag: DragState,
    gesture: Option<InputModality>,
}

impl SlideTrack {
    pub fn new(positions: Vec<f64>, start_index: usize) -> Option<Self> {
        let last = positions.len().checked_sub(1)?;
        let active = start_index.min(last);
        let nav = NavIndex::new(active, positions.len())?;
        let drag = DragState {
            committed_offset: positions[active],
            live_position: positions[active],
            ..DragState::default()
        };
        Some(Self {
            positions,
            nav,
            drag,
            gesture: None,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn nav(&self) -> NavIndex {
        self.nav
    }

    pub fn active(&self) -> usize {
        self.nav.active
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn offset(&self) -> f64 {
        self.drag.committed_offset
    }

    pub fn gesture(&self) -> Option<InputModality> {
        self.gesture
    }

    pub fn begin_gesture(&mut self, pointer_x: f64, modality: InputModality) -> bool {
        if matches!(self.gesture, Some(active) if active != modality) {
            return false;
        }
        self.gesture = Some(modality);
        self.drag.reset(pointer_x);
        true
    }

    pub fn track_gesture(&mut self, pointer_x: f64, modality: InputModality) -> Option<f64> {
        if self.gesture != Some(modality) {
            return None;
        }
        Some(self.drag.track(pointer_x))
    }

    pub fn end_gesture(&mut self, modality: InputModality) -> Option<(SnapDecision, SlideChange)> {
        if self.gesture != Some(modality) {
            return None;
        }
        self.gesture = None;
        self.drag.commit();
        let decision = decide_snap(self.drag.movement, &self.nav);
        let change = self.go_to(decision.target())?;
        Some((decision, change))
    }

    pub fn go_to(&mut self, index: usize) -> Option<SlideChange> {
        let position = *self.positions.get(index)?;
        let nav = NavIndex::new(index, self.positions.len())?;
        let previous = self.nav.active;
        self.nav = nav;
        self.drag.committed_offset = position;
        self.drag.live_position = position;
        Some(SlideChange {
            previous,
            index,
            offset: position,
        })
    }

    pub fn go_previous(&mut self) -> Option<SlideChange> {
        let prev = self.nav.prev?;
        self.go_to(prev)
    }

    pub fn go_next(&mut self) -> Option<SlideChange> {
        let next = self.nav.next?;
        self.go_to(next)
    }

    pub fn relayout(&mut self, positions: Vec<f64>) -> Option<SlideChange> {
        if positions.len() != self.positions.len() {
            return None;
        }
        self.positions = positions;
        self.go_to(self.nav.active)
    }
}
