use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only snapshot of the signed-in account, rendered into the page by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Account {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub image_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    /// `None` means the user never saved preferences, so every type is enabled.
    #[serde(default)]
    pub notification_silenced_types: Option<Vec<String>>,
}

impl Account {
    /// The stored profile image, used whenever the typed card name has no match.
    pub fn stored_image(&self) -> StoredImage {
        StoredImage {
            image_name: self.image_name.clone().unwrap_or_default(),
            image: self.image.clone().unwrap_or_default(),
            artist: self.artist.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StoredImage {
    pub image_name: String,
    pub image: String,
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageEntry {
    pub uri: String,
    #[serde(default)]
    pub artist: String,
}

/// Lower-cased card name to artwork. Keys may carry a set tag such as `" [dom]"`.
pub type ImageDictionary = HashMap<String, ImageEntry>;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ImageDictResponse {
    #[serde(default)]
    pub dict: ImageDictionary,
}

/// Props the server embeds into the host document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PageProps {
    #[serde(default)]
    pub user: Account,
    #[serde(default, alias = "defaultNav")]
    pub default_nav: Option<String>,
}
