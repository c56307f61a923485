use crate::nav::NavIndex;

pub const SNAP_THRESHOLD_PX: f64 = 180.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapDecision {
    Next(usize),
    Previous(usize),
    Stay(usize),
}

impl SnapDecision {
    pub fn target(self) -> usize {
        match self {
            SnapDecision::Next(index) | SnapDecision::Previous(index) | SnapDecision::Stay(index) => {
                index
            }
        }
    }
}

pub fn decide_snap(movement: f64, nav: &NavIndex) -> SnapDecision {
    match (nav.prev, nav.next) {
        (_, Some(next)) if movement > SNAP_THRESHOLD_PX => SnapDecision::Next(next),
        (Some(prev), _) if movement < -SNAP_THRESHOLD_PX => SnapDecision::Previous(prev),
        _ => SnapDecision::Stay(nav.active),
    }
}
