use std::rc::Rc;

use gloo_events::EventListener;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use common::{
    Homepage, filter::ProjectFilter, modal::ContactModals, nav::NavMenu, scroll::ScrollSpy,
    theme::ThemeSwitcher,
};

use crate::{dom::WebPage, storage::LocalPreferences};

// event wiring
//
// every listener lives as long as the page, so they are all leaked with forget() instead of
// being kept in some owner that never drops

fn target(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn on_click<F>(element: &Element, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(element, "click", callback).forget();
}

fn subscribe_nav(page: &Rc<WebPage>, nav: NavMenu<Element>) {
    let nav = Rc::new(nav);

    if let Some(toggle) = &nav.toggle {
        let (page, nav) = (page.clone(), nav.clone());
        on_click(toggle, move |_| {
            let open = nav.on_toggle(page.as_ref());
            debug!({ open = open }, "toggled navigation menu");
        });
    }

    for link in &nav.links {
        let (page, nav) = (page.clone(), nav.clone());
        on_click(link, move |_| nav.on_link_click(page.as_ref()));
    }
}

fn subscribe_scroll(page: &Rc<WebPage>, spy: ScrollSpy<Element>) {
    let listener_page = page.clone();

    EventListener::new(page.window(), "scroll", move |_| {
        spy.on_scroll(listener_page.as_ref());
    })
    .forget();
}

fn subscribe_modals(page: &Rc<WebPage>, modals: ContactModals<Element>) {
    let modals = Rc::new(modals);

    for (trigger, _) in &modals.triggers {
        let (page, modals, trigger_node) = (page.clone(), modals.clone(), trigger.clone());
        on_click(trigger, move |_| {
            modals.open(page.as_ref(), &trigger_node);
        });
    }

    for close in &modals.closes {
        let (page, modals, close_node) = (page.clone(), modals.clone(), close.clone());
        on_click(close, move |_| {
            modals.on_close_click(page.as_ref(), &close_node);
        });
    }

    for panel in &modals.panels {
        let (page, modals, panel_node) = (page.clone(), modals.clone(), panel.clone());
        on_click(panel, move |event| {
            if let Some(target) = target(event) {
                modals.on_overlay_click(page.as_ref(), &panel_node, &target);
            }
        });
    }
}

fn subscribe_filter(page: &Rc<WebPage>, filter: ProjectFilter<Element>) {
    let page = page.clone();
    let container = filter.container.clone();

    on_click(&container, move |event| {
        if let Some(target) = target(event) {
            filter.on_click(page.as_ref(), &target);
        }
    });
}

fn subscribe_theme(page: &Rc<WebPage>, store: &Rc<LocalPreferences>, switcher: ThemeSwitcher<Element>) {
    let (page, store) = (page.clone(), store.clone());
    let button = switcher.button.clone();

    on_click(&button, move |_| {
        switcher.on_click(page.as_ref(), store.as_ref());
    });
}

pub fn subscribe(page: &Rc<WebPage>, store: &Rc<LocalPreferences>, homepage: Homepage<Element>) {
    if let Some(nav) = homepage.nav {
        subscribe_nav(page, nav);
    }

    if let Some(spy) = homepage.scroll {
        subscribe_scroll(page, spy);
    }

    if let Some(modals) = homepage.modals {
        subscribe_modals(page, modals);
    }

    if let Some(filter) = homepage.filter {
        subscribe_filter(page, filter);
    }

    if let Some(switcher) = homepage.theme {
        subscribe_theme(page, store, switcher);
    }
}
