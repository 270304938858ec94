use serde::{Deserialize, Serialize};

use crate::{SearchError, SearchOutput, UserAccount};

/// GraphQL document sent for every search. The schema is GitHub's and is
/// consumed as-is; pagination is fixed at the first ten user accounts.
pub const SEARCH_ACCOUNTS_QUERY: &str = r#"
query SearchAccounts($query: String!) {
  search(query: $query, type: USER, first: 10) {
    userCount
    nodes {
      ... on User {
        avatarUrl
        name
        url
        login
        repositories {
          totalCount
        }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub(crate) struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: SearchVariables<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchVariables<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    search: SearchConnection,
}

#[derive(Debug, Deserialize)]
struct SearchConnection {
    #[serde(rename = "userCount")]
    user_count: u32,
    #[serde(default)]
    nodes: Option<Vec<Option<UserNode>>>,
}

/// A node of the inline `... on User` fragment. Non-user matches arrive as
/// empty objects, so every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserNode {
    #[serde(rename = "avatarUrl")]
    avatar_url: Option<String>,
    name: Option<String>,
    url: Option<String>,
    login: Option<String>,
    repositories: Option<RepositoryCount>,
}

#[derive(Debug, Deserialize)]
struct RepositoryCount {
    #[serde(rename = "totalCount")]
    total_count: u32,
}

pub(crate) fn output_from_response(response: GraphqlResponse) -> Result<SearchOutput, SearchError> {
    if let Some(data) = response.data {
        let accounts = data
            .search
            .nodes
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(account_from_node)
            .collect();
        return Ok(SearchOutput {
            total: data.search.user_count,
            accounts,
        });
    }
    if !response.errors.is_empty() {
        let reasons = response
            .errors
            .into_iter()
            .map(|err| err.message)
            .collect::<Vec<_>>();
        return Err(SearchError::Service(reasons.join("; ")));
    }
    Err(SearchError::Decode(
        "response carried neither data nor errors".to_string(),
    ))
}

fn account_from_node(node: UserNode) -> Option<UserAccount> {
    let login = node.login?;
    Some(UserAccount {
        login,
        name: node.name,
        avatar_url: node.avatar_url.unwrap_or_default(),
        profile_url: node.url.unwrap_or_default(),
        repository_count: node
            .repositories
            .map(|repos| repos.total_count)
            .unwrap_or_default(),
    })
}
