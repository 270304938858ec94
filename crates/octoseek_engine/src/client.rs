use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use crate::graphql::{self, GraphqlRequest, GraphqlResponse, SearchVariables};
use crate::{SearchError, SearchOutput};

/// Identifies the client to the service; GitHub rejects anonymous agents.
const AGENT: &str = concat!("octoseek/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub endpoint: String,
    pub token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.github.com/graphql".to_string(),
            token: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait Searcher: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchOutput, SearchError>;
}

#[derive(Clone)]
pub struct GithubSearcher {
    endpoint: Url,
    token: Option<String>,
    client: reqwest::Client,
}

impl GithubSearcher {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|err| SearchError::InvalidEndpoint(err.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::Network(err.to_string()))?;

        Ok(Self {
            endpoint,
            token: settings.token,
            client,
        })
    }
}

#[async_trait::async_trait]
impl Searcher for GithubSearcher {
    async fn search(&self, query: &str) -> Result<SearchOutput, SearchError> {
        let body = GraphqlRequest {
            query: graphql::SEARCH_ACCOUNTS_QUERY,
            variables: SearchVariables { query },
        };
        let mut request = self.client.post(self.endpoint.clone()).json(&body);
        if let Some(token) = self.token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let decoded: GraphqlResponse = response
            .json()
            .await
            .map_err(|err| SearchError::Decode(err.to_string()))?;
        graphql::output_from_response(decoded)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::Timeout;
    }
    SearchError::Network(err.to_string())
}
