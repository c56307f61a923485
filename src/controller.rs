use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use slidenav_core::{slide_positions, InputModality, SlideChange, SlideConfig, SlideTrack};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Event, HtmlElement};

use crate::debounce::{Debouncer, RESIZE_DEBOUNCE_MS};
use crate::dom;
use crate::error::{js_err, DomError};
use crate::input;

pub(crate) const SLIDE_CHANGE_EVENT: &str = "slidechange";

const NO_TRANSITION: &str = "";

pub(crate) struct SlideController {
    track: HtmlElement,
    container: HtmlElement,
    slides: Vec<HtmlElement>,
    state: RefCell<SlideTrack>,
    active_class: String,
    transition: String,
    listeners: RefCell<Vec<EventListener>>,
    move_listener: RefCell<Option<EventListener>>,
    resize: Debouncer,
    change_hooks: RefCell<Vec<(u64, Rc<dyn Fn(usize)>)>>,
    next_hook_id: Cell<u64>,
}

impl SlideController {
    pub(crate) fn mount(config: &SlideConfig) -> Result<Rc<Self>, DomError> {
        let document = dom::document()?;
        let track = dom::require_html(&document, &config.slide_selector)?;
        let container = dom::require_html(&document, &config.container_selector)?;
        let slides = dom::html_children(&track);
        let positions = slide_positions(
            container.offset_width() as f64,
            &dom::measure_slides(&slides),
        );
        let state = SlideTrack::new(positions, config.start_index)
            .ok_or_else(|| DomError::EmptyTrack(config.slide_selector.clone()))?;
        let controller = Rc::new(Self {
            track,
            container,
            slides,
            state: RefCell::new(state),
            active_class: config.active_class.clone(),
            transition: config.transition.clone(),
            listeners: RefCell::new(Vec::new()),
            move_listener: RefCell::new(None),
            resize: Debouncer::new(RESIZE_DEBOUNCE_MS),
            change_hooks: RefCell::new(Vec::new()),
            next_hook_id: Cell::new(1),
        });
        controller.place_initial()?;
        controller.install_listeners()?;
        console::log!(
            "slidenav: mounted",
            controller.len(),
            "slides, active",
            controller.active(),
            "offset",
            controller.offset()
        );
        Ok(controller)
    }

    pub(crate) fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub(crate) fn active(&self) -> usize {
        self.state.borrow().active()
    }

    pub(crate) fn offset(&self) -> f64 {
        self.state.borrow().offset()
    }

    pub(crate) fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub(crate) fn active_class(&self) -> &str {
        &self.active_class
    }

    pub(crate) fn begin_gesture(self: &Rc<Self>, event: &Event) {
        let Some(point) = input::gesture_point(event) else {
            return;
        };
        if point.modality == InputModality::Mouse {
            if !input::is_primary_press(event) {
                return;
            }
            event.prevent_default();
        }
        if !self
            .state
            .borrow_mut()
            .begin_gesture(point.client_x, point.modality)
        {
            return;
        }
        self.set_transition(false);
        self.apply_offset(self.state.borrow().drag().live_position);
        let view = Rc::downgrade(self);
        let listener = EventListener::new(
            &self.container,
            point.modality.move_event(),
            move |event: &Event| {
                let Some(view) = view.upgrade() else {
                    return;
                };
                if let Some(point) = input::gesture_point(event) {
                    view.track_gesture(point.client_x, point.modality);
                }
            },
        );
        *self.move_listener.borrow_mut() = Some(listener);
    }

    pub(crate) fn track_gesture(&self, pointer_x: f64, modality: InputModality) {
        let live = self.state.borrow_mut().track_gesture(pointer_x, modality);
        if let Some(live) = live {
            self.apply_offset(live);
        }
    }

    pub(crate) fn end_gesture(&self, modality: InputModality) {
        let outcome = self.state.borrow_mut().end_gesture(modality);
        let Some((_, change)) = outcome else {
            return;
        };
        self.move_listener.borrow_mut().take();
        self.set_transition(true);
        self.apply_change(change);
    }

    pub(crate) fn go_to_slide(&self, index: usize) {
        let change = self.state.borrow_mut().go_to(index);
        if let Some(change) = change {
            self.apply_change(change);
        }
    }

    pub(crate) fn go_to_previous(&self) {
        let change = self.state.borrow_mut().go_previous();
        if let Some(change) = change {
            self.apply_change(change);
        }
    }

    pub(crate) fn go_to_next(&self) {
        let change = self.state.borrow_mut().go_next();
        if let Some(change) = change {
            self.apply_change(change);
        }
    }

    pub(crate) fn on_viewport_resize(&self) {
        let positions = slide_positions(
            self.container.offset_width() as f64,
            &dom::measure_slides(&self.slides),
        );
        let change = self.state.borrow_mut().relayout(positions);
        if let Some(change) = change {
            self.apply_change(change);
        }
    }

    pub(crate) fn add_change_hook(&self, hook: Rc<dyn Fn(usize)>) -> u64 {
        let id = self.next_hook_id.get();
        self.next_hook_id.set(id.saturating_add(1));
        self.change_hooks.borrow_mut().push((id, hook));
        id
    }

    pub(crate) fn remove_change_hook(&self, id: u64) {
        self.change_hooks
            .borrow_mut()
            .retain(|(hook_id, _)| *hook_id != id);
    }

    pub(crate) fn destroy(&self) {
        self.listeners.borrow_mut().clear();
        self.move_listener.borrow_mut().take();
        self.resize.cancel();
        self.change_hooks.borrow_mut().clear();
    }

    fn place_initial(&self) -> Result<(), DomError> {
        let (index, offset) = {
            let state = self.state.borrow();
            (state.active(), state.offset())
        };
        dom::set_transition(&self.track, NO_TRANSITION)?;
        dom::set_transform(&self.track, offset)?;
        dom::mark_active(&self.slides, index, &self.active_class)?;
        dom::flush_layout(&self.track);
        dom::set_transition(&self.track, &self.transition)
    }

    fn install_listeners(self: &Rc<Self>) -> Result<(), DomError> {
        let window = dom::window()?;
        let mut listeners = Vec::new();
        let view = Rc::downgrade(self);
        listeners.push(EventListener::new_with_options(
            &self.container,
            "mousedown",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                if let Some(view) = view.upgrade() {
                    view.begin_gesture(event);
                }
            },
        ));
        let view = Rc::downgrade(self);
        listeners.push(EventListener::new(
            &self.container,
            "touchstart",
            move |event: &Event| {
                if let Some(view) = view.upgrade() {
                    view.begin_gesture(event);
                }
            },
        ));
        listeners.push(self.end_listener(&window, "mouseup"));
        listeners.push(self.end_listener(&self.container, "touchend"));
        listeners.push(self.end_listener(&self.container, "touchcancel"));
        let view = Rc::downgrade(self);
        listeners.push(EventListener::new(&window, "resize", move |_event| {
            schedule_resize(&view);
        }));
        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    fn end_listener(
        self: &Rc<Self>,
        target: &web_sys::EventTarget,
        event_type: &'static str,
    ) -> EventListener {
        let view = Rc::downgrade(self);
        EventListener::new(target, event_type, move |event: &Event| {
            let Some(view) = view.upgrade() else {
                return;
            };
            if let Some(modality) = input::event_modality(event) {
                view.end_gesture(modality);
            }
        })
    }

    fn apply_offset(&self, offset: f64) {
        if let Err(err) = dom::set_transform(&self.track, offset) {
            console::warn!("slidenav: transform failed", err.to_string());
        }
    }

    fn set_transition(&self, enabled: bool) {
        let value = if enabled {
            self.transition.as_str()
        } else {
            NO_TRANSITION
        };
        if let Err(err) = dom::set_transition(&self.track, value) {
            console::warn!("slidenav: transition toggle failed", err.to_string());
        }
    }

    fn apply_change(&self, change: SlideChange) {
        self.apply_offset(change.offset);
        if let Err(err) = dom::mark_active(&self.slides, change.index, &self.active_class) {
            console::warn!("slidenav: active class update failed", err.to_string());
        }
        if let Err(err) = self.dispatch_change(change.index) {
            console::warn!("slidenav: change event failed", err.to_string());
        }
        let hooks: Vec<_> = self
            .change_hooks
            .borrow()
            .iter()
            .map(|(_, hook)| hook.clone())
            .collect();
        for hook in hooks {
            hook(change.index);
        }
    }

    fn dispatch_change(&self, index: usize) -> Result<(), DomError> {
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&JsValue::from_f64(index as f64));
        let event =
            CustomEvent::new_with_event_init_dict(SLIDE_CHANGE_EVENT, &init).map_err(js_err)?;
        self.container.dispatch_event(&event).map_err(js_err)?;
        Ok(())
    }
}

fn schedule_resize(view: &Weak<SlideController>) {
    let Some(controller) = view.upgrade() else {
        return;
    };
    let view = view.clone();
    controller.resize.call(move || {
        if let Some(controller) = view.upgrade() {
            controller.on_viewport_resize();
        }
    });
}
