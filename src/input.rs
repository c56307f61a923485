use slidenav_core::InputModality;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

pub(crate) const PRIMARY_BUTTON: i16 = 0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GesturePoint {
    pub modality: InputModality,
    pub client_x: f64,
}

pub(crate) fn gesture_point(event: &Event) -> Option<GesturePoint> {
    if let Some(event) = event.dyn_ref::<MouseEvent>() {
        return Some(GesturePoint {
            modality: InputModality::Mouse,
            client_x: event.client_x() as f64,
        });
    }
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.changed_touches().get(0)?;
    Some(GesturePoint {
        modality: InputModality::Touch,
        client_x: touch.client_x() as f64,
    })
}

pub(crate) fn event_modality(event: &Event) -> Option<InputModality> {
    InputModality::from_event_type(&event.type_())
}

pub(crate) fn is_primary_press(event: &Event) -> bool {
    event
        .dyn_ref::<MouseEvent>()
        .map(|event| event.button() == PRIMARY_BUTTON)
        .unwrap_or(true)
}
