use tracing::{Level, debug, instrument, trace};

use crate::config::ScrollConfig;
use crate::page::Page;

// scroll spy
//
// on every scroll the section under the header is recomputed and the nav link pointing at
// it is highlighted.  there is no throttling; a pass is a linear scan over a handful of
// sections and links
#[derive(Clone, Debug)]
pub struct ScrollSpy<N> {
    // (element, id) in document order
    sections: Vec<(N, String)>,
    links: Vec<N>,
    config: ScrollConfig,
}

// the part of an href after the last '#', if any
fn fragment(href: &str) -> Option<&str> {
    href.rsplit_once('#').map(|(_, frag)| frag)
}

impl<N: Clone + PartialEq> ScrollSpy<N> {
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn attach<P: Page<Node = N>>(page: &P, config: &ScrollConfig) -> Option<Self> {
        let sections: Vec<(N, String)> = page
            .elements_with_class(&config.section_class)
            .into_iter()
            .filter_map(|node| page.id(&node).map(|id| (node, id)))
            .collect();

        if sections.is_empty() {
            return None;
        }

        let links = page.elements_with_class(&config.link_class);

        debug!(
            { sections = sections.len(), links = links.len() },
            "attached scroll spy"
        );

        Some(ScrollSpy {
            sections,
            links,
            config: config.clone(),
        })
    }

    // a section is current when top < scroll_y <= top + height, with the header height
    // taken off its offset.  if ranges overlap, the last match in document order wins
    pub fn current_section<P: Page<Node = N>>(&self, page: &P) -> Option<&str> {
        let scroll_y = page.scroll_y();

        self.sections
            .iter()
            .filter(|(node, _)| {
                let top = page.offset_top(node) - self.config.header_offset;
                let height = page.offset_height(node);

                top < scroll_y && scroll_y <= top + height
            })
            .last()
            .map(|(_, id)| id.as_str())
    }

    // clears every link, then marks the first one targeting the current section.  a page
    // may link a section more than once (logo and menu entry), but only one link lights up
    pub fn on_scroll<P: Page<Node = N>>(&self, page: &P) -> Option<&str> {
        let current = self.current_section(page);

        let marked = current.and_then(|id| {
            self.links.iter().position(|link| {
                page.attribute(link, "href")
                    .is_some_and(|href| fragment(&href) == Some(id))
            })
        });

        for (i, link) in self.links.iter().enumerate() {
            if Some(i) == marked {
                page.add_class(link, &self.config.active_class);
            } else {
                page.remove_class(link, &self.config.active_class);
            }
        }

        trace!({ section = ?current }, "scroll spy pass");
        current
    }
}
