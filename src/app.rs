use std::cell::RefCell;

use gloo::console;
use wasm_bindgen::prelude::*;

use crate::carousel::Carousel;
use crate::config;

thread_local! {
    static CAROUSEL: RefCell<Option<Carousel>> = RefCell::new(None);
}

pub(crate) fn run() {
    let config = config::load_slide_config();
    match Carousel::mount(&config) {
        Ok(carousel) => {
            let previous = CAROUSEL.with(|slot| slot.borrow_mut().replace(carousel));
            if let Some(previous) = previous {
                previous.destroy();
            }
        }
        Err(err) => {
            console::error!("slidenav: setup failed", err.to_string());
        }
    }
}

#[wasm_bindgen(js_name = slidenavShutdown)]
pub fn shutdown() {
    let carousel = CAROUSEL.with(|slot| slot.borrow_mut().take());
    if let Some(carousel) = carousel {
        carousel.destroy();
    }
}

#[wasm_bindgen(js_name = slidenavGoTo)]
pub fn go_to(index: usize) {
    let controller = CAROUSEL.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|carousel| carousel.controller().clone())
    });
    if let Some(controller) = controller {
        controller.go_to_slide(index);
    }
}
