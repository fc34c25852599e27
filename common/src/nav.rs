use tracing::{Level, debug, instrument};

use crate::config::NavConfig;
use crate::page::Page;

// collapsible navigation menu
//
// the toggle button flips the menu open and closed; following any link inside the menu
// closes it again so mobile readers land on the content instead of a still-open menu
#[derive(Clone, Debug)]
pub struct NavMenu<N> {
    pub menu: N,
    pub toggle: Option<N>,
    pub links: Vec<N>,
    show_class: String,
}

impl<N: Clone + PartialEq> NavMenu<N> {
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn attach<P: Page<Node = N>>(page: &P, config: &NavConfig) -> Option<Self> {
        let menu = page.element_by_id(&config.menu_id)?;
        let toggle = page.element_by_id(&config.toggle_id);
        let links = page.elements_with_class(&config.link_class);

        debug!(
            { toggle = toggle.is_some(), links = links.len() },
            "attached navigation menu"
        );

        Some(NavMenu {
            menu,
            toggle,
            links,
            show_class: config.show_class.clone(),
        })
    }

    // returns whether the menu is now shown
    pub fn on_toggle<P: Page<Node = N>>(&self, page: &P) -> bool {
        page.toggle_class(&self.menu, &self.show_class)
    }

    pub fn on_link_click<P: Page<Node = N>>(&self, page: &P) {
        page.remove_class(&self.menu, &self.show_class);
    }

    pub fn is_open<P: Page<Node = N>>(&self, page: &P) -> bool {
        page.has_class(&self.menu, &self.show_class)
    }
}
