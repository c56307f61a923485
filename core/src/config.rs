use serde::Deserialize;

pub const DEFAULT_START_INDEX: usize = 2;
pub const SLIDE_ANCHOR_PREFIX: &str = "slide";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid slide config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideConfig {
    pub slide_selector: String,
    pub container_selector: String,
    pub prev_selector: Option<String>,
    pub next_selector: Option<String>,
    pub control_selector: Option<String>,
    pub controls: bool,
    pub start_index: usize,
    pub active_class: String,
    pub transition: String,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            slide_selector: ".slide".to_string(),
            container_selector: ".container".to_string(),
            prev_selector: Some(".prev".to_string()),
            next_selector: Some(".next".to_string()),
            control_selector: Some(".custom-controls".to_string()),
            controls: true,
            start_index: DEFAULT_START_INDEX,
            active_class: "active".to_string(),
            transition: "transform .3s".to_string(),
        }
    }
}

impl SlideConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn arrow_selectors(&self) -> Option<(&str, &str)> {
        let prev = self.prev_selector.as_deref()?.trim();
        let next = self.next_selector.as_deref()?.trim();
        if prev.is_empty() || next.is_empty() {
            return None;
        }
        Some((prev, next))
    }

    pub fn apply_location_hash(&mut self, hash: &str) {
        if let Some(index) = parse_slide_anchor(hash) {
            self.start_index = index;
        }
    }
}

pub fn slide_anchor(index: usize) -> String {
    format!("#{SLIDE_ANCHOR_PREFIX}{}", index + 1)
}

pub fn parse_slide_anchor(hash: &str) -> Option<usize> {
    let raw = hash.trim().trim_start_matches('#').trim();
    let digits = raw.strip_prefix(SLIDE_ANCHOR_PREFIX)?;
    let number: usize = digits.parse().ok()?;
    number.checked_sub(1)
}
