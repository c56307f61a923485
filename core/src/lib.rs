pub mod config;
pub mod drag;
pub mod layout;
pub mod nav;
pub mod snap;
pub mod track;

pub use config::{parse_slide_anchor, slide_anchor, ConfigError, SlideConfig};
pub use drag::{DragState, InputModality, DRAG_AMPLIFICATION};
pub use layout::{slide_position, slide_positions, SlideMetrics};
pub use nav::NavIndex;
pub use snap::{decide_snap, SnapDecision, SNAP_THRESHOLD_PX};
pub use track::{SlideChange, SlideTrack};
