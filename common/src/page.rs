use anyhow::Result;

// page environment
//
// every read and write the behaviors make against the browser goes through these traits,
// so the same logic runs against web-sys in the webapp and against an in-memory page in
// the unit tests
//
// node handles are opaque to the behaviors; the only thing they rely on is that two handles
// to the same element compare equal (the overlay click check needs this)
pub trait Page {
    type Node: Clone + PartialEq;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    // all elements carrying the class, in document order
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;

    // all descendants of scope carrying the class, in document order
    fn descendants_with_class(&self, scope: &Self::Node, class: &str) -> Vec<Self::Node>;

    // the nearest inclusive ancestor carrying the class
    fn closest_with_class(&self, node: &Self::Node, class: &str) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    // returns whether the class is present afterwards
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn id(&self, node: &Self::Node) -> Option<String> {
        self.attribute(node, "id").filter(|id| !id.is_empty())
    }

    // sets the inline display style
    fn set_display(&self, node: &Self::Node, value: &str);

    fn offset_top(&self, node: &Self::Node) -> f64;

    fn offset_height(&self, node: &Self::Node) -> f64;

    fn scroll_y(&self) -> f64;

    // attributes on the document root, i.e. <html>
    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&self, name: &str, value: &str);
}

// durable per-origin key-value store (local storage in the browser)
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&self, key: &str, value: &str) -> Result<()>;
}

// os-level color scheme preference
pub trait SystemPreference {
    fn prefers_dark(&self) -> bool;
}
