use gloo::console;
use slidenav_core::SlideConfig;

pub(crate) const CONFIG_ATTR: &str = "data-slide-config";

pub(crate) fn load_slide_config() -> SlideConfig {
    let mut config = load_attribute_config().unwrap_or_default();
    if let Some(hash) = location_hash() {
        config.apply_location_hash(&hash);
    }
    config
}

fn load_attribute_config() -> Option<SlideConfig> {
    let body = web_sys::window()?.document()?.body()?;
    let raw = body.get_attribute(CONFIG_ATTR)?;
    match SlideConfig::from_json(&raw) {
        Ok(config) => Some(config),
        Err(err) => {
            console::warn!("slidenav: ignoring", CONFIG_ATTR, err.to_string());
            None
        }
    }
}

fn location_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}
