use anyhow::Result;
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCollection, HtmlElement, Window};

use common::page::Page;

// web-sys backed page
//
// window and document are js handles, so cloning this is cheap; the listeners each hold
// their own copy through an Rc anyway
#[derive(Clone, Debug)]
pub struct WebPage {
    window: Window,
    document: Document,
}

fn collect(collection: HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

impl WebPage {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::Error::msg("window has no document"))?;

        Ok(WebPage { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for WebPage {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        collect(self.document.get_elements_by_class_name(class))
    }

    fn descendants_with_class(&self, scope: &Element, class: &str) -> Vec<Element> {
        collect(scope.get_elements_by_class_name(class))
    }

    // walked by hand rather than through Element::closest so class names never need
    // selector escaping
    fn closest_with_class(&self, node: &Element, class: &str) -> Option<Element> {
        let mut current = Some(node.clone());
        while let Some(element) = current {
            if element.class_list().contains(class) {
                return Some(element);
            }
            current = element.parent_element();
        }
        None
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().add_1(class) {
            error!("failed to add class {class}: {err:?}");
        }
    }

    fn remove_class(&self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().remove_1(class) {
            error!("failed to remove class {class}: {err:?}");
        }
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        match node.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                error!("failed to toggle class {class}: {err:?}");
                self.has_class(node, class)
            }
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_display(&self, node: &Element, value: &str) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };

        if let Err(err) = element.style().set_property("display", value) {
            error!("failed to set display: {err:?}");
        }
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |e| f64::from(e.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |e| f64::from(e.offset_height()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        let Some(root) = self.document.document_element() else {
            error!("document has no root element");
            return;
        };

        if let Err(err) = root.set_attribute(name, value) {
            error!("failed to set root attribute {name}: {err:?}");
        }
    }
}
