//! Page configuration and the server-rendered props bootstrap.

use crate::api::models::PageProps;
use thiserror::Error;

pub const IMAGE_DICT_PATH: &str = "/cube/api/imagedict";
pub const CARD_NAMES_PATH: &str = "/cube/api/fullnames";
pub const CARD_NAMES_TREE: &str = "cardnames";

#[cfg(target_arch = "wasm32")]
const PAGE_PROPS_ELEMENT_ID: &str = "page-props";
#[cfg(not(target_arch = "wasm32"))]
const PAGE_PROPS_ENV: &str = "ACCOUNT_PAGE_PROPS";
#[cfg(not(target_arch = "wasm32"))]
const API_ORIGIN_ENV: &str = "ACCOUNT_API_ORIGIN";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_API_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("page props element `{0}` not found")]
    MissingProps(String),
    #[error("failed to read page props from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid page props: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the page talks to. Provided to components through context.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub api_origin: String,
    pub image_dict_path: String,
    pub card_names_path: String,
    pub card_names_tree: String,
}

impl PageConfig {
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            api_origin: origin.into().trim_end_matches('/').to_string(),
            image_dict_path: IMAGE_DICT_PATH.to_string(),
            card_names_path: CARD_NAMES_PATH.to_string(),
            card_names_tree: CARD_NAMES_TREE.to_string(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
        let origin = window
            .location()
            .origin()
            .map_err(|_| ConfigError::NoWindow)?;
        Ok(Self::with_origin(origin))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        let origin =
            std::env::var(API_ORIGIN_ENV).unwrap_or_else(|_| DEFAULT_API_ORIGIN.to_string());
        Ok(Self::with_origin(origin))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_origin, path)
    }

    pub fn image_dict_url(&self) -> String {
        self.endpoint(&self.image_dict_path)
    }

    pub fn card_names_url(&self) -> String {
        self.endpoint(&self.card_names_path)
    }
}

pub fn parse_page_props(raw: &str) -> Result<PageProps, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(target_arch = "wasm32")]
pub fn load_page_props() -> Result<PageProps, ConfigError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ConfigError::NoWindow)?;
    let raw = document
        .get_element_by_id(PAGE_PROPS_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .ok_or_else(|| ConfigError::MissingProps(PAGE_PROPS_ELEMENT_ID.to_string()))?;
    parse_page_props(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_page_props() -> Result<PageProps, ConfigError> {
    let Ok(path) = std::env::var(PAGE_PROPS_ENV) else {
        return Ok(demo_page_props());
    };
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_page_props(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_page_props() -> PageProps {
    use crate::api::models::Account;

    PageProps {
        user: Account {
            email: "player@example.com".to_string(),
            username: "player".to_string(),
            about: String::new(),
            image_name: Some("Ambush Viper".to_string()),
            image: Some("/content/default_art.jpg".to_string()),
            artist: Some("Allen Williams".to_string()),
            ..Account::default()
        },
        default_nav: None,
    }
}
