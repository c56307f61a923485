use std::rc::Rc;

use gloo::console;
use slidenav_core::SlideConfig;

use crate::arrow_nav::ArrowNav;
use crate::controller::SlideController;
use crate::controls::SlideControls;
use crate::error::DomError;

pub(crate) struct Carousel {
    controller: Rc<SlideController>,
    arrows: Option<ArrowNav>,
    controls: Option<SlideControls>,
}

impl Carousel {
    pub(crate) fn mount(config: &SlideConfig) -> Result<Self, DomError> {
        let controller = SlideController::mount(config)?;
        let arrows = match config.arrow_selectors() {
            Some((prev, next)) => match ArrowNav::attach(&controller, prev, next) {
                Ok(arrows) => Some(arrows),
                Err(DomError::MissingElement(selector)) => {
                    console::warn!("slidenav: arrow control missing", selector);
                    None
                }
                Err(err) => return Err(err),
            },
            None => None,
        };
        let controls = if config.controls {
            match SlideControls::attach(&controller, config.control_selector.as_deref()) {
                Ok(controls) => Some(controls),
                Err(err) => {
                    console::warn!("slidenav: slide controls skipped", err.to_string());
                    None
                }
            }
        } else {
            None
        };
        Ok(Self {
            controller,
            arrows,
            controls,
        })
    }

    pub(crate) fn controller(&self) -> &Rc<SlideController> {
        &self.controller
    }

    pub(crate) fn destroy(self) {
        drop(self.controls);
        drop(self.arrows);
        self.controller.destroy();
        console::log!("slidenav: destroyed");
    }
}
