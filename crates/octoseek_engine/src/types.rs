pub type RequestId = u64;

/// One account returned by the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub profile_url: String,
    pub repository_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutput {
    /// Total match count reported by the service, not just the page returned.
    pub total: u32,
    pub accounts: Vec<UserAccount>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("service error: {0}")]
    Service(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        request: RequestId,
        result: Result<SearchOutput, SearchError>,
    },
}
