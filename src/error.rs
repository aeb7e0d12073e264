#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("unrecognized mode {0:?}, expected request, request-escaped or document")]
    UnknownMode(String),
    #[error("invalid page count {0:?}: {1}")]
    InvalidPageCount(String, #[source] std::num::ParseIntError),
    #[error("page count is not valid unicode: {0}")]
    PageCountEncoding(#[source] std::env::VarError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
