use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use anyhow::Result;

use crate::page::{Page, PreferenceStore, SystemPreference};

// in-memory page used by the unit tests
//
// elements are kept in insertion order, which doubles as document order as long as
// parents are added before their children
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct FakeNode {
    parent: Option<NodeId>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    display: Option<String>,
    offset_top: f64,
    offset_height: f64,
}

#[derive(Debug, Default)]
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    root: RefCell<HashMap<String, String>>,
    scroll: Cell<f64>,
}

impl FakePage {
    pub fn new() -> Self {
        FakePage::default()
    }

    pub fn add(&self, parent: Option<NodeId>, classes: &[&str], attributes: &[(&str, &str)]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();

        nodes.push(FakeNode {
            parent,
            classes: classes.iter().map(|c| String::from(*c)).collect(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (String::from(*k), String::from(*v)))
                .collect(),
            ..FakeNode::default()
        });

        NodeId(nodes.len() - 1)
    }

    pub fn set_geometry(&self, node: NodeId, top: f64, height: f64) {
        let mut nodes = self.nodes.borrow_mut();

        nodes[node.0].offset_top = top;
        nodes[node.0].offset_height = height;
    }

    pub fn scroll_to(&self, y: f64) {
        self.scroll.set(y);
    }

    pub fn display(&self, node: NodeId) -> Option<String> {
        self.nodes.borrow()[node.0].display.clone()
    }

    fn is_descendant(&self, node: NodeId, scope: NodeId) -> bool {
        let nodes = self.nodes.borrow();

        let mut current = nodes[node.0].parent;
        while let Some(parent) = current {
            if parent == scope {
                return true;
            }
            current = nodes[parent.0].parent;
        }
        false
    }
}

impl Page for FakePage {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n.attributes.get("id").is_some_and(|v| v == id))
            .map(NodeId)
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.classes.iter().any(|c| c == class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn descendants_with_class(&self, scope: &NodeId, class: &str) -> Vec<NodeId> {
        self.elements_with_class(class)
            .into_iter()
            .filter(|n| self.is_descendant(*n, *scope))
            .collect()
    }

    fn closest_with_class(&self, node: &NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(*node);
        while let Some(n) = current {
            if self.has_class(&n, class) {
                return Some(n);
            }
            current = self.nodes.borrow()[n.0].parent;
        }
        None
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes.borrow_mut()[node.0].classes.push(String::from(class));
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.retain(|c| c != class);
    }

    fn toggle_class(&self, node: &NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attributes.get(name).cloned()
    }

    fn set_display(&self, node: &NodeId, value: &str) {
        self.nodes.borrow_mut()[node.0].display = Some(String::from(value));
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.nodes.borrow()[node.0].offset_top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.nodes.borrow()[node.0].offset_height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll.get()
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.root
            .borrow_mut()
            .insert(String::from(name), String::from(value));
    }
}

#[derive(Debug, Default)]
pub struct FakeStore {
    values: RefCell<HashMap<String, String>>,

    // makes every read and write fail, to exercise the logging paths
    broken: bool,
}

impl FakeStore {
    pub fn broken() -> Self {
        FakeStore {
            broken: true,
            ..FakeStore::default()
        }
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = FakeStore::default();
        store
            .values
            .borrow_mut()
            .insert(String::from(key), String::from(value));
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for FakeStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        if self.broken {
            return Err(anyhow::Error::msg("storage unavailable"));
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if self.broken {
            return Err(anyhow::Error::msg("storage unavailable"));
        }
        self.values
            .borrow_mut()
            .insert(String::from(key), String::from(value));
        Ok(())
    }
}

pub struct FakeSystem {
    pub dark: bool,
}

impl SystemPreference for FakeSystem {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}
