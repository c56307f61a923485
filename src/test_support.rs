use std::cell::Cell;
use std::fmt::Write;

use slidenav_core::SlideConfig;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, MouseEvent, MouseEventInit, Touch,
    TouchEvent, TouchEventInit, TouchInit,
};

pub(crate) const SLIDE_WIDTH: i32 = 100;
pub(crate) const CONTAINER_WIDTH: i32 = 300;

thread_local! {
    static NEXT_FIXTURE: Cell<u32> = Cell::new(1);
}

pub(crate) struct Fixture {
    pub root: HtmlElement,
    pub config: SlideConfig,
    scope: String,
}

impl Fixture {
    pub(crate) fn new(slide_count: usize) -> Self {
        let id = NEXT_FIXTURE.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        let scope = format!("#fixture-{id}");
        let document = document();
        let root = document
            .create_element("div")
            .expect("create fixture root")
            .dyn_into::<HtmlElement>()
            .expect("div is an html element");
        root.set_id(&format!("fixture-{id}"));
        let mut slides = String::new();
        for index in 0..slide_count {
            let _ = write!(
                slides,
                r#"<li style="flex: 0 0 {SLIDE_WIDTH}px; width: {SLIDE_WIDTH}px; height: 20px;">{index}</li>"#
            );
        }
        root.set_inner_html(&format!(
            r#"<div class="container" style="position: relative; width: {CONTAINER_WIDTH}px; overflow: hidden;">
                 <ul class="slide" style="display: flex; margin: 0; padding: 0; list-style: none;">{slides}</ul>
               </div>
               <button class="prev">prev</button>
               <button class="next">next</button>"#
        ));
        document
            .body()
            .expect("document body")
            .append_child(&root)
            .expect("attach fixture");
        let config = SlideConfig {
            slide_selector: format!("{scope} .slide"),
            container_selector: format!("{scope} .container"),
            prev_selector: Some(format!("{scope} .prev")),
            next_selector: Some(format!("{scope} .next")),
            control_selector: Some(format!("{scope} .custom-controls")),
            ..SlideConfig::default()
        };
        Self {
            root,
            config,
            scope,
        }
    }

    pub(crate) fn find(&self, selector: &str) -> Element {
        document()
            .query_selector(&format!("{} {selector}", self.scope))
            .expect("valid selector")
            .expect("fixture element present")
    }

    pub(crate) fn find_html(&self, selector: &str) -> HtmlElement {
        self.find(selector)
            .dyn_into::<HtmlElement>()
            .expect("html element")
    }

    pub(crate) fn slides(&self) -> Vec<Element> {
        children(&self.find(".slide"))
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

pub(crate) fn document() -> Document {
    web_sys::window()
        .expect("window")
        .document()
        .expect("document")
}

pub(crate) fn children(parent: &Element) -> Vec<Element> {
    let list = parent.children();
    (0..list.length()).filter_map(|index| list.item(index)).collect()
}

pub(crate) fn active_indices(items: &[Element], class: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.class_list().contains(class))
        .map(|(index, _)| index)
        .collect()
}

pub(crate) fn slide_position(index: usize) -> f64 {
    let margin = (CONTAINER_WIDTH - SLIDE_WIDTH) as f64 / 2.0;
    -((index as i32 * SLIDE_WIDTH) as f64 - margin)
}

pub(crate) fn mouse_event(event_type: &str, client_x: i32) -> MouseEvent {
    button_event(event_type, client_x, 0)
}

pub(crate) fn button_event(event_type: &str, client_x: i32, button: i16) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(client_x);
    init.set_button(button);
    MouseEvent::new_with_mouse_event_init_dict(event_type, &init).expect("mouse event")
}

pub(crate) fn touch_event(target: &Element, event_type: &str, client_x: i32) -> TouchEvent {
    let target: &EventTarget = target.as_ref();
    let touch_init = TouchInit::new(1, target);
    touch_init.set_client_x(client_x as f64);
    let touch = Touch::new(&touch_init).expect("touch point");
    let touches = js_sys::Array::of1(&touch);
    let init = TouchEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_changed_touches(&touches);
    if event_type == "touchstart" || event_type == "touchmove" {
        init.set_touches(&touches);
    }
    TouchEvent::new_with_event_init_dict(event_type, &init).expect("touch event")
}

pub(crate) fn dispatch(target: &Element, event: &Event) -> bool {
    target.dispatch_event(event).expect("dispatch event")
}

pub(crate) fn click(target: &Element) {
    dispatch(target, &mouse_event("click", 0));
}
