use github_repo_query::{
    config::QueryConfig,
    github_api_utils::{
        repo_search_query::{github_query, github_query_escaped, GithubQuery},
        search_query::SearchQuery,
    },
    Error,
};

use dotenv::dotenv;

extern crate pretty_env_logger;
#[macro_use]
extern crate log;

fn main() {
    // load env variables
    dotenv().ok();
    pretty_env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let output = QueryConfig::from_env().and_then(|config| run(&args, &config));
    match output {
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}

/// Renders the output for `args` (program name first), printing is left to `main`.
fn run(args: &[String], config: &QueryConfig) -> Result<String, Error> {
    let mode = args.get(1).ok_or(Error::MissingArgument("mode"))?;
    let search = SearchQuery::from_words(args.iter().skip(2));
    if search.is_empty() {
        warn!("No search terms given, matching every repository of the owner");
    }
    let query_string = search.to_string();
    info!("Building {mode} for {query_string:?}, first {}", config.page_count);

    match mode.as_str() {
        "request" => render_request(&github_query(config.page_count, &query_string)),
        "request-escaped" => {
            render_request(&github_query_escaped(config.page_count, &query_string))
        }
        "document" => Ok(github_query(config.page_count, &query_string).query),
        _ => Err(Error::UnknownMode(mode.to_owned())),
    }
}

fn render_request(request: &GithubQuery) -> Result<String, Error> {
    Ok(serde_json::to_string(request)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        std::iter::once("repo-query")
            .chain(words.iter().copied())
            .map(str::to_owned)
            .collect()
    }

    fn config(page_count: i64) -> QueryConfig {
        QueryConfig { page_count }
    }

    #[test]
    fn missing_mode() {
        let err = run(&args(&[]), &config(10)).unwrap_err();
        assert!(matches!(err, Error::MissingArgument("mode")));
    }

    #[test]
    fn unknown_mode() {
        let err = run(&args(&["bogus", "language:rust"]), &config(10)).unwrap_err();
        assert!(matches!(err, Error::UnknownMode(mode) if mode == "bogus"));
    }

    #[test]
    fn request_body() {
        let output = run(&args(&["request", "language:javascript"]), &config(10)).unwrap();
        let body: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert_eq!(body["query"], github_query(10, "language:javascript").query);
    }

    #[test]
    fn request_escaped_body() {
        let output = run(&args(&["request-escaped", "say\"hi"]), &config(3)).unwrap();
        let body: serde_json::Value = serde_json::from_str(&output).unwrap();
        let query = body["query"].as_str().unwrap();
        assert!(query.contains("search(query: \"say\\\"hi user:oscaralbertoag sort:updated-desc\""));
        assert!(query.contains("first: 3)"));
    }

    #[test]
    fn document_joins_words() {
        let output = run(&args(&["document", "parser", "topic:rust"]), &config(5)).unwrap();
        assert_eq!(output, github_query(5, "parser topic:rust").query);
    }

    #[test]
    fn document_without_terms() {
        let output = run(&args(&["document"]), &config(1)).unwrap();
        assert!(output.contains(
            "search(query: \" user:oscaralbertoag sort:updated-desc\", type: REPOSITORY, first: 1)"
        ));
    }
}
