use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Event;

use crate::controller::SlideController;
use crate::dom;
use crate::error::DomError;

pub(crate) struct ArrowNav {
    _listeners: Vec<EventListener>,
}

impl ArrowNav {
    pub(crate) fn attach(
        controller: &Rc<SlideController>,
        prev_selector: &str,
        next_selector: &str,
    ) -> Result<Self, DomError> {
        let document = dom::document()?;
        let prev = dom::require_element(&document, prev_selector)?;
        let next = dom::require_element(&document, next_selector)?;
        let view = Rc::downgrade(controller);
        let prev_listener = EventListener::new(&prev, "click", move |_event: &Event| {
            if let Some(view) = view.upgrade() {
                view.go_to_previous();
            }
        });
        let view = Rc::downgrade(controller);
        let next_listener = EventListener::new(&next, "click", move |_event: &Event| {
            if let Some(view) = view.upgrade() {
                view.go_to_next();
            }
        });
        Ok(Self {
            _listeners: vec![prev_listener, next_listener],
        })
    }
}
