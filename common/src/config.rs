use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// homepage configuration
//
// these are the anchors the behaviors look for in the markup.  the defaults match the
// stock page, so a config document only needs to name what it changes
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PageConfig {
    pub nav: NavConfig,
    pub scroll: ScrollConfig,
    pub modal: ModalConfig,
    pub filter: FilterConfig,
    pub theme: ThemeConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    pub menu_id: String,
    pub toggle_id: String,
    pub link_class: String,

    // added to the menu while it is open
    pub show_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            menu_id: String::from("nav-menu"),
            toggle_id: String::from("nav-toggle"),
            link_class: String::from("nav__link"),
            show_class: String::from("show-menu"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    // sections without an id are ignored
    pub section_class: String,
    pub link_class: String,
    pub active_class: String,

    // height of the fixed header, subtracted from each section's offset
    pub header_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            section_class: String::from("section"),
            link_class: String::from("nav__link"),
            active_class: String::from("active-link"),
            header_offset: 58.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ModalBinding {
    pub trigger_id: String,
    pub modal_id: String,
}

impl ModalBinding {
    fn new(trigger_id: &str, modal_id: &str) -> Self {
        ModalBinding {
            trigger_id: String::from(trigger_id),
            modal_id: String::from(modal_id),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ModalConfig {
    pub modal_class: String,
    pub close_class: String,
    pub active_class: String,
    pub bindings: Vec<ModalBinding>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        ModalConfig {
            modal_class: String::from("modal"),
            close_class: String::from("modal__close"),
            active_class: String::from("active"),
            bindings: vec![
                ModalBinding::new("wechat-btn", "wechat-modal"),
                ModalBinding::new("qq-btn", "qq-modal"),
            ],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    pub container_class: String,
    pub button_class: String,
    pub card_class: String,
    pub active_class: String,
    pub filter_attribute: String,
    pub category_attribute: String,

    // filter value that matches every card
    pub all_value: String,

    // display value for visible cards
    pub visible_display: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            container_class: String::from("projects__filters"),
            button_class: String::from("filter-button"),
            card_class: String::from("project-card"),
            active_class: String::from("active"),
            filter_attribute: String::from("data-filter"),
            category_attribute: String::from("data-category"),
            all_value: String::from("all"),
            visible_display: String::from("flex"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub button_id: String,
    pub storage_key: String,
    pub root_attribute: String,

    // the icon shows the theme a click switches to, so dark mode shows the sun
    pub dark_icon: String,
    pub light_icon: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            button_id: String::from("theme-button"),
            storage_key: String::from("selected-theme"),
            root_attribute: String::from("data-theme"),
            dark_icon: String::from("fa-sun"),
            light_icon: String::from("fa-moon"),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: PageConfig,
}

impl PageConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        let data: TomlConfigFile = toml::from_str(doc)
            .map_err(|err| anyhow::Error::msg(format!("failed to parse page config: {err}")))?;

        debug!("successfully parsed page config");
        Ok(data.config)
    }
}
