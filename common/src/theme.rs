use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, error, instrument};

use crate::config::ThemeConfig;
use crate::page::{Page, PreferenceStore, SystemPreference};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme {other}"))),
        }
    }
}

// a stored choice always beats the os preference.  storage failures and unrecognized
// values are logged and treated as if nothing were stored
pub fn resolve<S: PreferenceStore, Y: SystemPreference>(store: &S, system: &Y, key: &str) -> Theme {
    let stored = match store.load(key) {
        Ok(v) => v,
        Err(err) => {
            error!("failed to read theme preference: {err}");
            None
        }
    };

    let stored = stored.and_then(|v| match v.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(err) => {
            debug!("ignoring stored theme: {err}");
            None
        }
    });

    match stored {
        Some(theme) => theme,
        None if system.prefers_dark() => Theme::Dark,
        None => Theme::Light,
    }
}

// theme switcher
//
// the theme is resolved once at load.  from then on the toggle flips whatever is applied to
// the document, so os preference changes are no longer followed
#[derive(Clone, Debug)]
pub struct ThemeSwitcher<N> {
    pub button: N,
    config: ThemeConfig,
}

// applies the resolved theme to the document root.  this happens even when the page has no
// theme button, so the stored choice still takes effect
#[instrument(level=Level::DEBUG, skip_all)]
pub fn apply_initial<P, S, Y>(page: &P, store: &S, system: &Y, config: &ThemeConfig) -> Theme
where
    P: Page,
    S: PreferenceStore,
    Y: SystemPreference,
{
    let theme = resolve(store, system, &config.storage_key);
    page.set_root_attribute(&config.root_attribute, theme.as_str());

    debug!({ theme = %theme }, "applied initial theme");
    theme
}

impl<N: Clone + PartialEq> ThemeSwitcher<N> {
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn attach<P, S, Y>(page: &P, store: &S, system: &Y, config: &ThemeConfig) -> Option<Self>
    where
        P: Page<Node = N>,
        S: PreferenceStore,
        Y: SystemPreference,
    {
        let theme = apply_initial(page, store, system, config);

        let button = page.element_by_id(&config.button_id)?;
        let switcher = ThemeSwitcher {
            button,
            config: config.clone(),
        };

        switcher.sync_icon(page, theme);
        Some(switcher)
    }

    // the applied attribute is the source of truth here, not the stored value
    pub fn current<P: Page<Node = N>>(&self, page: &P) -> Option<Theme> {
        page.root_attribute(&self.config.root_attribute)
            .and_then(|v| v.parse().ok())
    }

    pub fn on_click<P, S>(&self, page: &P, store: &S) -> Theme
    where
        P: Page<Node = N>,
        S: PreferenceStore,
    {
        // a missing or unrecognized attribute flips to light
        let theme = self.current(page).map_or(Theme::Light, Theme::toggled);

        page.set_root_attribute(&self.config.root_attribute, theme.as_str());

        if let Err(err) = store.save(&self.config.storage_key, theme.as_str()) {
            error!("failed to store theme preference: {err}");
        }

        // attach left exactly one of the two icons on the button, so flipping both swaps it
        page.toggle_class(&self.button, &self.config.dark_icon);
        page.toggle_class(&self.button, &self.config.light_icon);

        debug!({ theme = %theme }, "switched theme");
        theme
    }

    // dark shows the sun, light shows the moon.  used at load; clicks toggle both classes
    fn sync_icon<P: Page<Node = N>>(&self, page: &P, theme: Theme) {
        let (show, hide) = match theme {
            Theme::Dark => (&self.config.dark_icon, &self.config.light_icon),
            Theme::Light => (&self.config.light_icon, &self.config.dark_icon),
        };

        page.add_class(&self.button, show);
        page.remove_class(&self.button, hide);
    }
}
