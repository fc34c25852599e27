use std::rc::Rc;

use gloo_events::EventListener;
use tracing::{Level, debug, error};

use common::{Homepage, config::PageConfig, page::Page};

mod dom;
use dom::WebPage;

mod events;

mod storage;
use storage::{ColorScheme, LocalPreferences};

// optional inline overrides, e.g.
//
//   <script type="application/toml" id="homepage-config">
//   [config.theme]
//   storage_key = "my-theme"
//   </script>
const CONFIG_ELEMENT_ID: &str = "homepage-config";

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    let page = match WebPage::new() {
        Ok(page) => page,
        Err(err) => {
            error!("failed to locate page: {err}");
            return;
        }
    };

    // a module script is deferred, so the document is normally parsed by now
    if page.document().ready_state() == "loading" {
        let document = page.document().clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| start(page)).forget();
    } else {
        start(page);
    }
}

fn read_config(page: &WebPage) -> PageConfig {
    let Some(doc) = page
        .element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };

    PageConfig::from_toml(&doc).unwrap_or_else(|err| {
        error!("{err}, using defaults");
        PageConfig::default()
    })
}

fn start(page: WebPage) {
    let config = read_config(&page);
    let system = ColorScheme::query(page.window());

    let page = Rc::new(page);
    let store = Rc::new(LocalPreferences);

    let homepage = Homepage::attach(page.as_ref(), store.as_ref(), &system, &config);
    events::subscribe(&page, &store, homepage);

    debug!("homepage ready");
}
