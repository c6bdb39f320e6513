use chart::ChartAttributes;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

/// The canvas with the given id. Anything else under that id counts as no target.
pub fn find_canvas(document: &Document, id: &str) -> Option<HtmlCanvasElement> {
    let element = document.get_element_by_id(id)?;
    match element.dyn_into::<HtmlCanvasElement>() {
        Ok(canvas) => Some(canvas),
        Err(element) => {
            log::warn!("Element #{} is a <{}>, not a canvas", id, element.tag_name().to_lowercase());
            None
        }
    }
}

pub fn read_attributes(element: &Element) -> ChartAttributes {
    ChartAttributes::from_lookup(|name| element.get_attribute(name))
}
