use std::time::Duration;

use digest_auth::{AuthContext, HttpMethod};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{Config, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{ApiError, AtlasError, Result};
use crate::responses::{ApiErrorBody, Page};
use crate::types::{Cluster, Project};

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl From<&Config> for ClientOptions {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.base_url(),
            api_version: config.api_version().to_string(),
            timeout: config.timeout(),
        }
    }
}

/// Atlas Administration API client using HTTP Digest authentication.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct AtlasClient {
    http: Option<Client>,
    base_url: Url,
    accept: String,
    public_key: String,
    private_key: String,
}

impl AtlasClient {
    pub fn with_options(
        public_key: String,
        private_key: String,
        options: ClientOptions,
    ) -> Result<Self> {
        let base_url = Url::parse(&options.base_url).map_err(|e| AtlasError::InvalidBaseUrl {
            url: options.base_url.clone(),
            source: e,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AtlasError::InvalidBaseUrl {
                url: options.base_url,
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }

        let http = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http: Some(http),
            base_url,
            accept: format!("application/vnd.atlas.{}+json", options.api_version),
            public_key,
            private_key,
        })
    }

    /// Fetch all projects visible to the API key.
    pub async fn list_projects(&self) -> std::result::Result<Vec<Project>, ApiError> {
        let response = self.send(Method::GET, &["groups"]).await?;
        read_page(response).await
    }

    /// Fetch the clusters of a single project.
    pub async fn list_clusters(
        &self,
        project_id: &str,
    ) -> std::result::Result<Vec<Cluster>, ApiError> {
        let response = self
            .send(Method::GET, &["groups", project_id, "clusters"])
            .await?;
        read_page(response).await
    }

    /// Delete a project. Irreversible.
    pub async fn delete_project(&self, project_id: &str) -> std::result::Result<(), ApiError> {
        let response = self.send(Method::DELETE, &["groups", project_id]).await?;
        checked_body(response).await.map(|_| ())
    }

    /// Release the connection pool. Calling it again is a no-op.
    pub fn close(&mut self) {
        self.http = None;
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, http: &Client, method: Method, url: &Url) -> RequestBuilder {
        http.request(method, url.clone())
            .header(ACCEPT, &self.accept)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Issue a request, answering the server's digest challenge if one comes back.
    async fn send(
        &self,
        method: Method,
        segments: &[&str],
    ) -> std::result::Result<Response, ApiError> {
        let http = self.http.as_ref().ok_or(ApiError::Closed)?;
        let url = self.endpoint(segments);

        let probe = self.request(http, method.clone(), &url).send().await?;
        if probe.status() != StatusCode::UNAUTHORIZED {
            return Ok(probe);
        }
        let Some(challenge) = probe.headers().get(WWW_AUTHENTICATE) else {
            return Ok(probe);
        };

        let challenge = challenge
            .to_str()
            .map_err(|e| ApiError::Auth(e.to_string()))?;
        let mut prompt =
            digest_auth::parse(challenge).map_err(|e| ApiError::Auth(e.to_string()))?;

        let uri = request_uri(&url);
        let context = AuthContext::new_with_method(
            self.public_key.as_str(),
            self.private_key.as_str(),
            uri.as_str(),
            Option::<&[u8]>::None,
            HttpMethod::from(method.as_str()),
        );
        let answer = prompt
            .respond(&context)
            .map_err(|e| ApiError::Auth(e.to_string()))?;

        let response = self
            .request(http, method, &url)
            .header(AUTHORIZATION, answer.to_header_string())
            .send()
            .await?;
        Ok(response)
    }
}

/// Path and query as they appear on the request line.
fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

async fn checked_body(response: Response) -> std::result::Result<String, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read response body>".to_string());
        return Err(ApiError::RequestFailed {
            status: status.as_u16(),
            detail: failure_detail(status, &body),
        });
    }

    Ok(response.text().await?)
}

async fn read_page<T: DeserializeOwned>(
    response: Response,
) -> std::result::Result<Vec<T>, ApiError> {
    let body = checked_body(response).await?;
    decode_results(&body)
}

/// Parse a list body into records, keeping the order of the `results` array.
pub fn decode_results<T: DeserializeOwned>(
    body: &str,
) -> std::result::Result<Vec<T>, ApiError> {
    let page: Page<T> =
        serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
    Ok(page.into_results())
}

fn failure_detail(status: StatusCode, body: &str) -> String {
    if let Some(summary) = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.summary())
    {
        return summary;
    }

    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("no response body").to_string()
    } else {
        body.to_string()
    }
}
