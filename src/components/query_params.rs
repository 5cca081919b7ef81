//! Access to the current URL's query parameters.
//!
//! Components never touch `window.location` directly; they get a
//! [`QueryParams`] handle from context so they can run against
//! [`MemoryQueryParams`] on native builds and in tests.

use std::cell::RefCell;
use std::rc::Rc;

pub trait QueryParams {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Shared handle stored in context.
pub type SharedQueryParams = Rc<dyn QueryParams>;

#[derive(Debug, Default)]
pub struct MemoryQueryParams {
    pairs: RefCell<Vec<(String, String)>>,
    writes: RefCell<usize>,
}

impl MemoryQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(query: &str) -> Self {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self {
            pairs: RefCell::new(pairs),
            writes: RefCell::new(0),
        }
    }

    /// Renders the parameters as `a=1&b=2`, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .borrow()
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Number of `set`/`delete` calls that changed the parameters.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|value| value.into_owned())
        .unwrap_or(spaced)
}

impl QueryParams for MemoryQueryParams {
    fn get(&self, key: &str) -> Option<String> {
        self.pairs
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    // Same semantics as URLSearchParams.set: first entry replaced, duplicates dropped.
    fn set(&self, key: &str, value: &str) {
        let mut pairs = self.pairs.borrow_mut();
        match pairs.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                pairs[idx].1 = value.to_string();
                let mut seen = 0usize;
                pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => pairs.push((key.to_string(), value.to_string())),
        }
        *self.writes.borrow_mut() += 1;
    }

    fn delete(&self, key: &str) {
        let mut pairs = self.pairs.borrow_mut();
        let before = pairs.len();
        pairs.retain(|(k, _)| k != key);
        if pairs.len() != before {
            *self.writes.borrow_mut() += 1;
        }
    }
}

/// The real address bar. Updates use `history.replaceState`, so tab switches
/// don't add history entries or reload the page.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserQueryParams;

#[cfg(target_arch = "wasm32")]
impl BrowserQueryParams {
    fn current_url() -> Option<web_sys::Url> {
        let href = web_sys::window()?.location().href().ok()?;
        web_sys::Url::new(&href).ok()
    }

    fn replace_url(url: &web_sys::Url) {
        let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
            return;
        };
        if let Err(err) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href()))
        {
            dioxus::logger::tracing::warn!("[nav] replaceState failed: {err:?}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl QueryParams for BrowserQueryParams {
    fn get(&self, key: &str) -> Option<String> {
        Self::current_url()?.search_params().get(key)
    }

    fn set(&self, key: &str, value: &str) {
        let Some(url) = Self::current_url() else {
            return;
        };
        url.search_params().set(key, value);
        Self::replace_url(&url);
    }

    fn delete(&self, key: &str) {
        let Some(url) = Self::current_url() else {
            return;
        };
        url.search_params().delete(key);
        Self::replace_url(&url);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_query_params() -> SharedQueryParams {
    Rc::new(BrowserQueryParams)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_query_params() -> SharedQueryParams {
    Rc::new(MemoryQueryParams::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render() {
        let params = MemoryQueryParams::parse("?nav=email&q=Llanowar+Elves%20%5BDOM%5D");
        assert_eq!(params.get("nav").as_deref(), Some("email"));
        assert_eq!(params.get("q").as_deref(), Some("Llanowar Elves [DOM]"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(
            params.to_query_string(),
            "nav=email&q=Llanowar%20Elves%20%5BDOM%5D"
        );
    }

    #[test]
    fn set_replaces_and_dedupes() {
        let params = MemoryQueryParams::parse("nav=a&x=1&nav=b");
        params.set("nav", "password");
        assert_eq!(params.to_query_string(), "nav=password&x=1");
        params.set("page", "2");
        assert_eq!(params.to_query_string(), "nav=password&x=1&page=2");
        assert_eq!(params.write_count(), 2);
    }

    #[test]
    fn delete_of_absent_key_is_not_a_write() {
        let params = MemoryQueryParams::parse("x=1");
        params.delete("nav");
        assert_eq!(params.write_count(), 0);
        params.delete("x");
        assert_eq!(params.write_count(), 1);
        assert_eq!(params.to_query_string(), "");
    }
}
