use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub const DEFAULT_INVENTORY_URL: &str = "https://dev-0tf0hinghgjl39z.api.raw-labs.com/inventory";
pub const MODE_STORAGE_KEY: &str = "mode";
/// Browser global (or host env var) that overrides the inventory endpoint.
pub const INVENTORY_URL_OVERRIDE: &str = "INVENTORY_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorConfig {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub github: LinkConfig,
    pub author: AuthorConfig,
    pub inventory_url: String,
    pub mode_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Inventory".into(),
            github: LinkConfig {
                title: "Inventory".into(),
                url: "https://github.com/Kamlesh502/inventory".into(),
            },
            author: AuthorConfig {
                name: "kamlesh".into(),
                url: "https://github.com/kamlesh502/".into(),
            },
            inventory_url: DEFAULT_INVENTORY_URL.into(),
            mode_key: MODE_STORAGE_KEY.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_override() -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(INVENTORY_URL_OVERRIDE))
        .ok()
        .and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_override() -> Option<String> {
    std::env::var(INVENTORY_URL_OVERRIDE).ok()
}

impl AppConfig {
    /// Defaults plus the endpoint override, if one is set and non-empty.
    pub fn from_environment() -> Self {
        let config = Self::default();
        match read_override() {
            Some(url) if !url.trim().is_empty() => config.with_inventory_url(url.trim()),
            _ => config,
        }
    }

    pub fn with_inventory_url(mut self, url: impl Into<String>) -> Self {
        self.inventory_url = url.into();
        self
    }

    pub fn with_mode_key(mut self, key: impl Into<String>) -> Self {
        self.mode_key = key.into();
        self
    }
}
