use tracing::{Level, debug, instrument};

pub mod config;
pub mod filter;
pub mod modal;
pub mod nav;
pub mod page;
pub mod scroll;
pub mod theme;

#[cfg(test)]
mod fake;

use config::PageConfig;
use filter::ProjectFilter;
use modal::ContactModals;
use nav::NavMenu;
use page::{Page, PreferenceStore, SystemPreference};
use scroll::ScrollSpy;
use theme::ThemeSwitcher;

// homepage behaviors
//
// the five behaviors are independent; each one is attached from its own anchors and a
// missing anchor only makes that one inert.  the webapp subscribes each present behavior
// to the matching dom events
#[derive(Clone, Debug)]
pub struct Homepage<N> {
    pub nav: Option<NavMenu<N>>,
    pub scroll: Option<ScrollSpy<N>>,
    pub modals: Option<ContactModals<N>>,
    pub filter: Option<ProjectFilter<N>>,
    pub theme: Option<ThemeSwitcher<N>>,
}

impl<N: Clone + PartialEq> Homepage<N> {
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn attach<P, S, Y>(page: &P, store: &S, system: &Y, config: &PageConfig) -> Self
    where
        P: Page<Node = N>,
        S: PreferenceStore,
        Y: SystemPreference,
    {
        let homepage = Homepage {
            nav: NavMenu::attach(page, &config.nav),
            scroll: ScrollSpy::attach(page, &config.scroll),
            modals: ContactModals::attach(page, &config.modal),
            filter: ProjectFilter::attach(page, &config.filter),
            theme: ThemeSwitcher::attach(page, store, system, &config.theme),
        };

        debug!(
            {
                nav = homepage.nav.is_some(),
                scroll = homepage.scroll.is_some(),
                modals = homepage.modals.is_some(),
                filter = homepage.filter.is_some(),
                theme = homepage.theme.is_some()
            },
            "attached homepage behaviors"
        );

        homepage
    }
}
