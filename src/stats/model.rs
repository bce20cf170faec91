//! GraphQL response model and aggregation into a [`GitHubStats`] record.

use serde::Deserialize;

/// Aggregated profile statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubStats {
    pub repos: u64,
    pub stars: u64,
    pub forks: u64,
    pub followers: u64,
    pub commits: u64,
    /// `"<net> (+<adds>, -<dels>)"`, or `"0"` in the fallback record
    pub loc: String,
}

impl GitHubStats {
    /// The record used whenever statistics cannot be fetched.
    pub fn zero() -> Self {
        Self {
            repos: 0,
            stars: 0,
            forks: 0,
            followers: 0,
            commits: 0,
            loc: "0".to_string(),
        }
    }
}

impl Default for GitHubStats {
    fn default() -> Self {
        Self::zero()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseData {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct User {
    pub followers: TotalCount,
    pub repositories: Repositories,
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TotalCount {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Repositories {
    pub total_count: u64,
    #[serde(default)]
    pub nodes: Vec<Repository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Repository {
    #[serde(default)]
    pub stargazers: Option<TotalCount>,
    #[serde(default)]
    pub fork_count: u64,
    #[serde(default)]
    pub default_branch_ref: Option<BranchRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchRef {
    #[serde(default)]
    pub target: Option<Target>,
}

/// `... on Commit` target; other target kinds have no history.
#[derive(Debug, Deserialize)]
pub(crate) struct Target {
    #[serde(default)]
    pub history: Option<History>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct History {
    #[serde(default)]
    pub nodes: Vec<CommitNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitNode {
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitAuthor {
    #[serde(default)]
    pub user: Option<Login>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Login {
    pub login: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionCalendar {
    pub total_contributions: u64,
}

/// Fold a user record into statistics, counting only commits authored by `username`.
pub(crate) fn aggregate(username: &str, user: &User) -> GitHubStats {
    let repos = &user.repositories.nodes;

    let mut additions = 0u64;
    let mut deletions = 0u64;
    for commit in repos
        .iter()
        .filter_map(|repo| repo.default_branch_ref.as_ref())
        .filter_map(|branch| branch.target.as_ref())
        .filter_map(|target| target.history.as_ref())
        .flat_map(|history| history.nodes.iter())
    {
        let authored = commit
            .author
            .as_ref()
            .and_then(|author| author.user.as_ref())
            .is_some_and(|login| login.login.eq_ignore_ascii_case(username));
        if authored {
            additions += commit.additions;
            deletions += commit.deletions;
        }
    }

    GitHubStats {
        repos: user.repositories.total_count,
        stars: repos
            .iter()
            .filter_map(|repo| repo.stargazers.as_ref())
            .map(|count| count.total_count)
            .sum(),
        forks: repos.iter().map(|repo| repo.fork_count).sum(),
        followers: user.followers.total_count,
        commits: user
            .contributions_collection
            .contribution_calendar
            .total_contributions,
        loc: format_loc(additions, deletions),
    }
}

/// Format lines of code as `"<net> (+<adds>, -<dels>)"` with thousands separators.
pub fn format_loc(additions: u64, deletions: u64) -> String {
    let net = additions as i128 - deletions as i128;
    format!(
        "{} (+{}, -{})",
        group_thousands(net),
        group_thousands(additions as i128),
        group_thousands(deletions as i128)
    )
}

/// Insert `,` every three digits: `-1234567` -> `-1,234,567`.
pub fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
