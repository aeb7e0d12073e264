use super::{REPO_OWNER, REPO_SORT};

/// GraphQL document requesting the viewer name and one page of repositories.
/// `#owner` and `#sort` are fixed, `#pageCount` and `#queryString` come from the caller.
const REPO_SEARCH_TEMPLATE: &str = "
        {
            viewer {
              name
            }
            search(query: \"#queryString user:#owner sort:#sort\", type: REPOSITORY, first: #pageCount) {
              repositoryCount
              nodes {
                ... on Repository {
                  name
                  description
                  id
                  url
                  viewerSubscription
                }
              }
            }
          }      
        ";

/// Request body handed to a GraphQL client, serializes as `{"query": "..."}`.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GithubQuery {
    pub query: String,
}

/// Builds the repository search document for `page_count` results matching `query_string`.
///
/// Neither argument is validated. `query_string` is inserted verbatim into a quoted
/// GraphQL string, so a `"` or `\` in it produces a document the server will reject.
/// Use [`github_query_escaped`] when the search term is not trusted.
pub fn github_query(page_count: i64, query_string: &str) -> GithubQuery {
    let query = REPO_SEARCH_TEMPLATE
        .replace("#owner", REPO_OWNER)
        .replace("#sort", REPO_SORT)
        .replace("#pageCount", &page_count.to_string())
        // last, so placeholder-like text in the search term is left alone
        .replace("#queryString", query_string);
    trace!("Built repo search query: first {page_count}, terms {query_string:?}");
    GithubQuery { query }
}

/// Same document as [`github_query`], with `query_string` escaped as the body of a
/// GraphQL string literal.
pub fn github_query_escaped(page_count: i64, query_string: &str) -> GithubQuery {
    github_query(page_count, &escape_string_body(query_string))
}

/// GraphQL string escapes are a subset of JSON's, strip the surrounding quotes.
fn escape_string_body(value: &str) -> String {
    let quoted = serde_json::Value::String(value.to_owned()).to_string();
    quoted[1..quoted.len() - 1].to_owned()
}
