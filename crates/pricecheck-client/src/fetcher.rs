use std::time::Duration;

use pricecheck_core::error::AppError;
use pricecheck_core::traits::Fetcher;
use reqwest::Client;
use url::Url;

/// Desktop browser User-Agent; several retailers serve stripped or blocked
/// pages to obvious bots.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// HTTP fetcher using reqwest.
///
/// Downloads raw product-page markup with a browser-like User-Agent and a
/// per-request timeout. Only `http`/`https` URLs with a host are fetched.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    timeout_secs: u64,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        // Rounded up to whole seconds for `AppError::Timeout`.
        let timeout_secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let target = validate_url(url)?;

        let response = self.client.get(target).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                AppError::NetworkError(format!("Connection failed: {e}"))
            } else {
                AppError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpError(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else {
                AppError::InvalidData(format!("Failed to read response body: {e}"))
            }
        })?;

        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "Fetched page");
        Ok(body)
    }
}

/// Parse `url` and reject anything that is not an http(s) URL with a host.
fn validate_url(url: &str) -> Result<Url, AppError> {
    let parsed = Url::parse(url).map_err(|e| AppError::HttpError(format!("Invalid URL: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AppError::HttpError(format!(
                "URL scheme '{scheme}' is not allowed (only http/https)"
            )));
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::HttpError("URL has no host".to_string()));
    }

    Ok(parsed)
}
