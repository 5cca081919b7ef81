use crate::api::models::{ImageDictResponse, ImageDictionary};
use crate::config::PageConfig;
use crate::diagnostics::{log_perf, now_ms};
use once_cell::sync::Lazy;
use thiserror::Error;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub struct ImageDictClient {
    pub config: PageConfig,
}

impl ImageDictClient {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// Fetches the card name to artwork dictionary. Called once per page mount.
    pub async fn fetch(&self) -> Result<ImageDictionary, ApiError> {
        let started_at = now_ms();
        let url = self.config.image_dict_url();
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let json: ImageDictResponse =
            response
                .json()
                .await
                .map_err(|source| ApiError::Decode {
                    url: url.clone(),
                    source,
                })?;

        log_perf(
            "imagedict.fetch",
            started_at,
            &format!("entries={}", json.dict.len()),
        );
        Ok(json.dict)
    }
}
