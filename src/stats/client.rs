//! GitHubClient - fetches profile statistics from the GitHub GraphQL API.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use super::model::{aggregate, GitHubStats, GraphQlResponse};

/// The environment variable name for the GitHub token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Default GraphQL endpoint.
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Default timeout for HTTP requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub rejects requests without a user agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Owned repositories, most recently pushed first, with per-commit line
/// counts of each default branch.
pub const STATS_QUERY: &str = r#"
query($login: String!) {
  user(login: $login) {
    followers { totalCount }
    repositories(first: 30, ownerAffiliations: OWNER, orderBy: {field: PUSHED_AT, direction: DESC}) {
      totalCount
      nodes {
        stargazers { totalCount }
        forkCount
        defaultBranchRef {
          target {
            ... on Commit {
              history(first: 100) {
                nodes {
                  additions
                  deletions
                  author { user { login } }
                }
              }
            }
          }
        }
      }
    }
    contributionsCollection {
      contributionCalendar { totalContributions }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    login: &'a str,
}

/// Errors that can occur while fetching statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("GitHub token not configured")]
    MissingToken,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed GraphQL response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("user '{0}' not found")]
    UserNotFound(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Client for the GitHub GraphQL API.
pub struct GitHubClient {
    token: String,
    endpoint: String,
    http_client: reqwest::Client,
}

impl GitHubClient {
    /// Create a client with an explicit token.
    pub fn new(token: String) -> Result<Self, StatsError> {
        Self::with_endpoint(token, GITHUB_GRAPHQL_URL.to_string())
    }

    /// Create a client against a custom endpoint.
    ///
    /// Useful for testing against a mock server.
    pub fn with_endpoint(token: String, endpoint: String) -> Result<Self, StatsError> {
        Self::with_timeout(token, endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom endpoint and request timeout.
    pub fn with_timeout(
        token: String,
        endpoint: String,
        timeout: Duration,
    ) -> Result<Self, StatsError> {
        if token.is_empty() {
            return Err(StatsError::MissingToken);
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            token,
            endpoint,
            http_client,
        })
    }

    /// Get the endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and aggregate statistics for `username`.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Http` on transport failure or timeout,
    /// `StatsError::Status` on a non-success status,
    /// `StatsError::Malformed` if the body does not match the expected shape,
    /// `StatsError::GraphQl` if the API reports errors without data,
    /// or `StatsError::UserNotFound` if the user record is null.
    pub async fn fetch_stats(&self, username: &str) -> Result<GitHubStats, StatsError> {
        let request = GraphQlRequest {
            query: STATS_QUERY,
            variables: Variables { login: username },
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StatsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GraphQlResponse = serde_json::from_str(&body)?;
        let user = match parsed.data.and_then(|data| data.user) {
            Some(user) => user,
            None => {
                return Err(match parsed.errors {
                    Some(errors) if !errors.is_empty() => StatsError::GraphQl(
                        errors
                            .into_iter()
                            .map(|e| e.message)
                            .collect::<Vec<_>>()
                            .join("; "),
                    ),
                    _ => StatsError::UserNotFound(username.to_string()),
                });
            }
        };

        let stats = aggregate(username, &user);
        log::info!(
            "Fetched GitHub stats for {}: {} repos, {} stars, LOC {}",
            username,
            stats.repos,
            stats.stars,
            stats.loc
        );
        Ok(stats)
    }

    /// Fetch statistics, collapsing any failure into [`GitHubStats::zero`].
    pub async fn fetch_stats_or_default(&self, username: &str) -> GitHubStats {
        match self.fetch_stats(username).await {
            Ok(stats) => stats,
            Err(e) => {
                log::warn!("GitHub stats unavailable ({}); using zero values", e);
                GitHubStats::zero()
            }
        }
    }
}

/// Blocking wrapper: fetch statistics for `username` from `endpoint` with `token`.
///
/// Never fails; every error is logged and mapped to the zero record.
pub fn fetch_blocking(username: &str, token: &str, endpoint: &str) -> GitHubStats {
    let client = match GitHubClient::with_endpoint(token.to_string(), endpoint.to_string()) {
        Ok(client) => client,
        Err(e) => {
            log::warn!("GitHub client unavailable ({}); using zero values", e);
            return GitHubStats::zero();
        }
    };
    fetch_blocking_with(&client, username)
}

/// Run [`GitHubClient::fetch_stats_or_default`] on a fresh current-thread runtime.
pub fn fetch_blocking_with(client: &GitHubClient, username: &str) -> GitHubStats {
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::warn!("{}; using zero values", StatsError::Runtime(e));
            return GitHubStats::zero();
        }
    };
    rt.block_on(client.fetch_stats_or_default(username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_client() {
        let client = GitHubClient::new("ghp_test".to_string()).unwrap();
        assert_eq!(client.endpoint(), GITHUB_GRAPHQL_URL);
    }

    #[test]
    fn test_empty_token_returns_error() {
        let result = GitHubClient::new(String::new());
        assert!(matches!(result, Err(StatsError::MissingToken)));
    }

    #[test]
    fn test_request_serialization() {
        let request = GraphQlRequest {
            query: "query { viewer { login } }",
            variables: Variables { login: "alice" },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["variables"]["login"], "alice");
        assert_eq!(json["query"], "query { viewer { login } }");
    }

    #[test]
    fn test_query_shape() {
        assert!(STATS_QUERY.contains("repositories(first: 30, ownerAffiliations: OWNER"));
        assert!(STATS_QUERY.contains("history(first: 100)"));
        assert!(STATS_QUERY.contains("totalContributions"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(StatsError::MissingToken.to_string(), "GitHub token not configured");
        assert_eq!(
            StatsError::UserNotFound("ghost".to_string()).to_string(),
            "user 'ghost' not found"
        );
        assert_eq!(
            StatsError::Status {
                status: 502,
                body: "bad gateway".to_string()
            }
            .to_string(),
            "GitHub API returned 502: bad gateway"
        );
    }
}
