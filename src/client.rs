use crate::config::Config;
use crate::error::{request_error, CanvasResult};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Timeout for a single API round trip; the only cancellation mechanism
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Records requested per page when listing collections
pub(crate) const PER_PAGE: &str = "100";

/// Blocking client for the Canvas REST API of a single course.
///
/// Every call is one synchronous round trip on the calling thread; the
/// client holds no state beyond the immutable configuration.
pub struct CanvasClient {
    config: Config,
    http: Client,
}

impl CanvasClient {
    /// Create a new client for the configured institution and course
    pub fn new(config: Config) -> CanvasResult<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { config, http })
    }

    /// The configuration this client was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build an absolute URL under `{institution}/api/{version}/`
    pub(crate) fn api_url(&self, path: &str) -> CanvasResult<Url> {
        let raw = format!(
            "{}/api/{}/{}",
            self.config.institution_url.trim_end_matches('/'),
            self.config.api_version,
            path
        );
        Ok(Url::parse(&raw)?)
    }

    /// Build an absolute URL under the configured course
    pub(crate) fn course_url(&self, path: &str) -> CanvasResult<Url> {
        self.api_url(&format!("courses/{}/{}", self.config.course_id, path))
    }

    pub(crate) fn get(&self, url: Url) -> CanvasResult<Response> {
        self.send(self.http.get(url))
    }

    pub(crate) fn post_json(&self, url: Url, body: &Value) -> CanvasResult<Response> {
        self.send(self.http.post(url).json(body))
    }

    pub(crate) fn put_json(&self, url: Url, body: &Value) -> CanvasResult<Response> {
        self.send(self.http.put(url).json(body))
    }

    pub(crate) fn delete(&self, url: Url) -> CanvasResult<Response> {
        self.send(self.http.delete(url))
    }

    /// Attach the bearer header, send, and map non-2xx to a request error
    fn send(&self, request: RequestBuilder) -> CanvasResult<Response> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(request_error(status, body));
        }

        Ok(response)
    }
}
