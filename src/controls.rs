use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use slidenav_core::slide_anchor;
use web_sys::{Document, Element, Event};

use crate::controller::SlideController;
use crate::dom;
use crate::error::{js_err, DomError};

pub(crate) const CONTROL_ATTR: &str = "data-control";
pub(crate) const CONTROL_ATTR_VALUE: &str = "slide";

pub(crate) struct SlideControls {
    root: Element,
    generated: bool,
    controller: Weak<SlideController>,
    hook_id: u64,
    _listeners: Vec<EventListener>,
}

impl SlideControls {
    pub(crate) fn attach(
        controller: &Rc<SlideController>,
        custom_selector: Option<&str>,
    ) -> Result<Self, DomError> {
        let document = dom::document()?;
        let custom = match custom_selector {
            Some(selector) => dom::query(&document, selector)?,
            None => None,
        };
        let (root, generated) = match custom {
            Some(root) => (root, false),
            None => {
                let list = build_control_list(&document, controller.len())?;
                controller.container().append_child(&list).map_err(js_err)?;
                (list, true)
            }
        };
        let items = dom::element_children(&root);
        let mut listeners = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let view = Rc::downgrade(controller);
            listeners.push(EventListener::new_with_options(
                item,
                "click",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| {
                    event.prevent_default();
                    if let Some(view) = view.upgrade() {
                        view.go_to_slide(index);
                    }
                },
            ));
        }
        let active_class = controller.active_class().to_string();
        dom::mark_active(&items, controller.active(), &active_class)?;
        let hook_id = controller.add_change_hook(Rc::new(move |index| {
            if let Err(err) = dom::mark_active(&items, index, &active_class) {
                console::warn!("slidenav: control update failed", err.to_string());
            }
        }));
        Ok(Self {
            root,
            generated,
            controller: Rc::downgrade(controller),
            hook_id,
            _listeners: listeners,
        })
    }
}

impl Drop for SlideControls {
    fn drop(&mut self) {
        if let Some(controller) = self.controller.upgrade() {
            controller.remove_change_hook(self.hook_id);
        }
        if self.generated {
            self.root.remove();
        }
    }
}

fn build_control_list(document: &Document, count: usize) -> Result<Element, DomError> {
    let list = document.create_element("ul").map_err(js_err)?;
    list.set_attribute(CONTROL_ATTR, CONTROL_ATTR_VALUE)
        .map_err(js_err)?;
    for index in 0..count {
        let item = document.create_element("li").map_err(js_err)?;
        let link = document.create_element("a").map_err(js_err)?;
        link.set_attribute("href", &slide_anchor(index))
            .map_err(js_err)?;
        let label = (index + 1).to_string();
        link.set_text_content(Some(label.as_str()));
        item.append_child(&link).map_err(js_err)?;
        list.append_child(&item).map_err(js_err)?;
    }
    Ok(list)
}
