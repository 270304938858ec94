//! Octoseek engine: GitHub account search over GraphQL.
mod client;
mod engine;
mod graphql;
mod types;

pub use client::{GithubSearcher, SearchSettings, Searcher};
pub use engine::EngineHandle;
pub use graphql::SEARCH_ACCOUNTS_QUERY;
pub use types::{EngineEvent, RequestId, SearchError, SearchOutput, UserAccount};
