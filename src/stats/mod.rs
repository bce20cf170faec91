//! GitHub statistics provider.
//!
//! One GraphQL request per run, no retries. Any failure collapses into the
//! zero-valued [`GitHubStats`] record so card generation always continues.

mod client;
mod model;

pub use client::{
    fetch_blocking, fetch_blocking_with, GitHubClient, StatsError, DEFAULT_TIMEOUT,
    GITHUB_GRAPHQL_URL, GITHUB_TOKEN_ENV, STATS_QUERY,
};
pub use model::{format_loc, group_thousands, GitHubStats};
