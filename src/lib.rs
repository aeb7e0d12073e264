#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod github_api_utils;

pub use error::Error;
