#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavIndex {
    pub prev: Option<usize>,
    pub active: usize,
    pub next: Option<usize>,
}

impl NavIndex {
    pub fn new(active: usize, len: usize) -> Option<Self> {
        if active >= len {
            return None;
        }
        let last = len - 1;
        Some(Self {
            prev: active.checked_sub(1),
            active,
            next: if active == last { None } else { Some(active + 1) },
        })
    }
}
