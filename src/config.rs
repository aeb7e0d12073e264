use crate::Error;
use std::env::VarError;

pub const PAGE_COUNT_VAR: &str = "GH_QUERY_PAGE_COUNT";
pub const DEFAULT_PAGE_COUNT: i64 = 10;

/// Settings read from the environment (and a `.env` file once the binary has loaded it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Value of `first:` in the search, GitHub caps it at 100 server side.
    pub page_count: i64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_count: DEFAULT_PAGE_COUNT,
        }
    }
}

impl QueryConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_page_count(std::env::var(PAGE_COUNT_VAR))
    }

    fn from_page_count(raw: Result<String, VarError>) -> Result<Self, Error> {
        let raw = match raw {
            Ok(raw) => raw,
            Err(VarError::NotPresent) => {
                debug!("{PAGE_COUNT_VAR} not set, using {DEFAULT_PAGE_COUNT}");
                return Ok(Self::default());
            }
            Err(err @ VarError::NotUnicode(_)) => return Err(Error::PageCountEncoding(err)),
        };
        let page_count = raw
            .trim()
            .parse::<i64>()
            .map_err(|err| Error::InvalidPageCount(raw.clone(), err))?;
        if !(1..=100).contains(&page_count) {
            warn!("{PAGE_COUNT_VAR}={page_count} is outside 1..=100, GitHub may reject the search");
        }
        Ok(Self { page_count })
    }
}
