//! Turns the typed card name into the profile image preview.

use crate::api::models::{ImageDictionary, StoredImage};
use crate::utils::{normalize_card_name, strip_bracket_suffix};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub name: String,
    pub uri: String,
    pub artist: String,
}

impl From<&StoredImage> for ResolvedImage {
    fn from(stored: &StoredImage) -> Self {
        Self {
            name: stored.image_name.clone(),
            uri: stored.image.clone(),
            artist: stored.artist.clone(),
        }
    }
}

/// Exact lookup after case folding. A miss yields the stored image unchanged.
pub fn resolve(query: &str, dictionary: &ImageDictionary, fallback: &StoredImage) -> ResolvedImage {
    match dictionary.get(&normalize_card_name(query)) {
        Some(entry) => ResolvedImage {
            name: strip_bracket_suffix(query).to_string(),
            uri: entry.uri.clone(),
            artist: entry.artist.clone(),
        },
        None => ResolvedImage::from(fallback),
    }
}

/// Value of the hidden `image` form field. Only present on a dictionary hit,
/// so submitting without a match keeps the stored image.
pub fn selection_field(query: &str, dictionary: &ImageDictionary) -> Option<String> {
    let key = normalize_card_name(query);
    dictionary.contains_key(&key).then_some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ImageEntry;

    fn dict(entries: &[(&str, &str, &str)]) -> ImageDictionary {
        entries
            .iter()
            .map(|(key, uri, artist)| {
                (
                    key.to_string(),
                    ImageEntry {
                        uri: uri.to_string(),
                        artist: artist.to_string(),
                    },
                )
            })
            .collect()
    }

    fn fallback() -> StoredImage {
        StoredImage {
            image_name: "Default".to_string(),
            image: "d.png".to_string(),
            artist: "Y".to_string(),
        }
    }

    #[test]
    fn hit_uses_entry_and_strips_set_tag() {
        let dictionary = dict(&[("llanowar elves [dom]", "a.png", "X")]);
        let resolved = resolve("Llanowar Elves [DOM]", &dictionary, &fallback());
        assert_eq!(
            resolved,
            ResolvedImage {
                name: "Llanowar Elves".to_string(),
                uri: "a.png".to_string(),
                artist: "X".to_string(),
            }
        );
    }

    #[test]
    fn every_key_resolves_to_its_entry() {
        let dictionary = dict(&[
            ("llanowar elves [dom]", "a.png", "X"),
            ("lightning bolt", "b.png", "Z"),
            ("forest [m19] [foil]", "c.png", "W"),
        ]);
        for (key, entry) in &dictionary {
            let resolved = resolve(key, &dictionary, &fallback());
            assert_eq!(resolved.name, strip_bracket_suffix(key));
            assert_eq!(resolved.uri, entry.uri);
            assert_eq!(resolved.artist, entry.artist);
        }
    }

    #[test]
    fn empty_dictionary_always_falls_back() {
        let dictionary = ImageDictionary::new();
        for query in ["", "Llanowar Elves", "anything [at] all"] {
            assert_eq!(
                resolve(query, &dictionary, &fallback()),
                ResolvedImage::from(&fallback())
            );
        }
    }

    #[test]
    fn no_prefix_or_trimmed_matching() {
        let dictionary = dict(&[("lightning bolt", "b.png", "Z")]);
        for query in ["lightning", "Lightning Bolt ", " lightning bolt", "Lightning Bolt [M10]"] {
            assert_eq!(resolve(query, &dictionary, &fallback()).uri, "d.png");
            assert_eq!(selection_field(query, &dictionary), None);
        }
    }

    #[test]
    fn display_name_keeps_typed_casing() {
        let dictionary = dict(&[("lightning bolt", "b.png", "Z")]);
        assert_eq!(
            resolve("LIGHTNING bolt", &dictionary, &fallback()).name,
            "LIGHTNING bolt"
        );
    }

    #[test]
    fn hidden_field_only_on_hit() {
        let dictionary = dict(&[("llanowar elves [dom]", "a.png", "X")]);
        assert_eq!(
            selection_field("Llanowar Elves [DOM]", &dictionary).as_deref(),
            Some("llanowar elves [dom]")
        );
        assert_eq!(selection_field("Llanowar Elves", &dictionary), None);
        assert_eq!(selection_field("", &dictionary), None);
    }

    #[test]
    fn missing_stored_image_resolves_to_empty_fields() {
        let resolved = resolve("x", &ImageDictionary::new(), &StoredImage::default());
        assert_eq!(resolved.name, "");
        assert_eq!(resolved.uri, "");
    }
}
