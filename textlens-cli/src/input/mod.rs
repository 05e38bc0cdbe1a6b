//! Input handling module

pub mod glob_resolver;
pub mod web_fetcher;

pub use glob_resolver::{resolve_sources, SourceSpec};
pub use web_fetcher::{WebFetcher, WebSource};
