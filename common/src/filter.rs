use tracing::{Level, debug, instrument};

use crate::config::FilterConfig;
use crate::page::Page;

// project filter
//
// one delegated click listener on the filter container.  the clicked button becomes the only
// active one, and every card whose category matches its value (or every card, for the "all"
// value) is shown while the rest are hidden
#[derive(Clone, Debug)]
pub struct ProjectFilter<N> {
    pub container: N,
    buttons: Vec<N>,
    cards: Vec<N>,
    config: FilterConfig,
}

impl<N: Clone + PartialEq> ProjectFilter<N> {
    // the markup is expected to mark the "all" button active, but if nothing is active we
    // select it here so exactly one button is active from the start
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn attach<P: Page<Node = N>>(page: &P, config: &FilterConfig) -> Option<Self> {
        let container = page
            .elements_with_class(&config.container_class)
            .into_iter()
            .next()?;

        let buttons = page.descendants_with_class(&container, &config.button_class);
        let cards = page.elements_with_class(&config.card_class);

        let filter = ProjectFilter {
            container,
            buttons,
            cards,
            config: config.clone(),
        };

        if filter.active_button(page).is_none() {
            if let Some(all) = filter
                .buttons
                .iter()
                .find(|b| filter.value(page, b).as_deref() == Some(config.all_value.as_str()))
            {
                debug!("no active filter in markup, selecting the all filter");
                page.add_class(all, &config.active_class);
            }
        }

        debug!(
            { buttons = filter.buttons.len(), cards = filter.cards.len() },
            "attached project filter"
        );

        Some(filter)
    }

    fn value<P: Page<Node = N>>(&self, page: &P, button: &N) -> Option<String> {
        page.attribute(button, &self.config.filter_attribute)
    }

    pub fn active_button<P: Page<Node = N>>(&self, page: &P) -> Option<&N> {
        self.buttons
            .iter()
            .find(|b| page.has_class(b, &self.config.active_class))
    }

    // handles a click anywhere inside the container.  clicks that do not land on (or inside)
    // a filter button are ignored; otherwise returns the number of visible cards
    pub fn on_click<P: Page<Node = N>>(&self, page: &P, target: &N) -> Option<usize> {
        let button = page
            .closest_with_class(target, &self.config.button_class)
            .filter(|b| self.buttons.contains(b))?;

        for other in &self.buttons {
            page.remove_class(other, &self.config.active_class);
        }
        page.add_class(&button, &self.config.active_class);

        let value = self.value(page, &button).unwrap_or_default();
        let visible = self.apply(page, &value);

        debug!({ filter = %value, visible }, "filtered projects");
        Some(visible)
    }

    // shows the cards matching value and hides the rest
    pub fn apply<P: Page<Node = N>>(&self, page: &P, value: &str) -> usize {
        let mut visible = 0;

        for card in &self.cards {
            let category = page.attribute(card, &self.config.category_attribute);
            let shown = value == self.config.all_value || category.as_deref() == Some(value);

            if shown {
                page.set_display(card, &self.config.visible_display);
                visible += 1;
            } else {
                page.set_display(card, "none");
            }
        }

        visible
    }
}
