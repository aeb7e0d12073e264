pub mod repo_search_query;
pub mod search_query;

/// Account every repository search is scoped to.
pub const REPO_OWNER: &str = "oscaralbertoag";
/// Most recently updated repositories first.
pub const REPO_SORT: &str = "updated-desc";
