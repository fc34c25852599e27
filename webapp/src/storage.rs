use anyhow::Result;

use gloo_console::error as console_error;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

use common::page::{PreferenceStore, SystemPreference};

// local storage preferences
//
// values are stored as bare strings, so the stored theme reads "dark" and not "\"dark\"".
// storage is looked up on every access instead of through gloo's LocalStorage::raw(), which
// traps when the browser blocks storage (private mode, sandboxed iframes); here that is an
// error like any other and only the theme falls back to the os preference
pub struct LocalPreferences;

fn storage_from(lookup: Result<Option<Storage>, JsValue>) -> Result<Storage> {
    match lookup {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => {
            console_error!("Local storage is not available");
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
        Err(err) => {
            console_error!(format!("Failed to open local storage: {err:?}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

fn local_storage() -> Result<Storage> {
    let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))?;

    storage_from(window.local_storage())
}

impl PreferenceStore for LocalPreferences {
    fn load(&self, key: &str) -> Result<Option<String>> {
        local_storage()?.get_item(key).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?.set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}

// prefers-color-scheme, read once at load
pub struct ColorScheme {
    dark: bool,
}

impl ColorScheme {
    pub fn query(window: &Window) -> Self {
        let dark = match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                console_error!(format!("Failed to query color scheme: {err:?}"));
                false
            }
        };

        ColorScheme { dark }
    }
}

impl SystemPreference for ColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}
