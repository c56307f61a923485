use slidenav_core::SlideMetrics;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{js_err, DomError};

pub(crate) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub(crate) fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<Element>, DomError> {
    document
        .query_selector(selector)
        .map_err(|_| DomError::InvalidSelector(selector.to_string()))
}

pub(crate) fn require_element(document: &Document, selector: &str) -> Result<Element, DomError> {
    query(document, selector)?.ok_or_else(|| DomError::MissingElement(selector.to_string()))
}

pub(crate) fn require_html(document: &Document, selector: &str) -> Result<HtmlElement, DomError> {
    require_element(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NotHtmlElement(selector.to_string()))
}

pub(crate) fn element_children(parent: &Element) -> Vec<Element> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .collect()
}

pub(crate) fn html_children(parent: &Element) -> Vec<HtmlElement> {
    element_children(parent)
        .into_iter()
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub(crate) fn measure_slides(slides: &[HtmlElement]) -> Vec<SlideMetrics> {
    slides
        .iter()
        .map(|slide| SlideMetrics {
            offset_left: slide.offset_left() as f64,
            width: slide.offset_width() as f64,
        })
        .collect()
}

pub(crate) fn set_transform(element: &HtmlElement, offset: f64) -> Result<(), DomError> {
    element
        .style()
        .set_property("transform", &format!("translate3d({offset}px, 0, 0)"))
        .map_err(js_err)
}

pub(crate) fn set_transition(element: &HtmlElement, value: &str) -> Result<(), DomError> {
    element
        .style()
        .set_property("transition", value)
        .map_err(js_err)
}

// Reading layout forces a style flush so the next transition change is not coalesced.
pub(crate) fn flush_layout(element: &HtmlElement) {
    let _ = element.offset_width();
}

pub(crate) fn mark_active<E: AsRef<Element>>(
    items: &[E],
    active: usize,
    class: &str,
) -> Result<(), DomError> {
    for (index, item) in items.iter().enumerate() {
        let classes = item.as_ref().class_list();
        let result = if index == active {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        result.map_err(js_err)?;
    }
    Ok(())
}
