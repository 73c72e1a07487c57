use crate::error::{Result, SpiderError};
use crate::http::*;
use async_trait::async_trait;
use tracing::{debug, error, trace};

/// A source of page bodies.
///
/// Every stage of the pipeline reads EDGAR through this trait, one blocking GET at a time;
/// [HttpFetcher] is the live implementation, tests serve recorded pages instead.
#[async_trait]
pub trait Fetch {
    /// GET `url` and return the response body as text.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// [Fetch] over a [reqwest::Client].
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: HttpClient,
}

impl HttpFetcher {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the client and wrap it; see [build_client].
    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        Ok(Self::new(build_client(user_agent)?))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        trace!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| {
                error!("failed to fetch {url}, error({err})");
                SpiderError::transport(url.as_str(), err)
            })?
            .error_for_status()
            .map_err(|err| {
                error!("unsuccessful response from {url}, error({err})");
                SpiderError::transport(url.as_str(), err)
            })?;

        let body = response.text().await.map_err(|err| {
            error!("failed to read body of {url}, error({err})");
            SpiderError::transport(url.as_str(), err)
        })?;
        debug!("fetched {} bytes from {url}", body.len());

        Ok(body)
    }
}

/// Build the HTTP client used against the SEC.
///
/// The SEC refuses requests without a descriptive User-Agent, so one is required. No timeout is
/// set here; callers who need one should configure their own [reqwest::Client].
pub fn build_client(user_agent: &str) -> Result<HttpClient> {
    if user_agent.trim().is_empty() {
        return Err(SpiderError::Parse("empty USER_AGENT".to_string()));
    }
    reqwest::ClientBuilder::new()
        .user_agent(user_agent)
        .build()
        .map_err(|err| {
            error!("failed to build reqwest client, error({err})");
            SpiderError::Parse(format!("http client: {err}"))
        })
}
