// Archived-tweet media resolver

pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod resolver;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::ResolverConfig;
pub use error::{Result, ResolverError};
pub use resolver::MediaResolver;
pub use store::{MediaEntry, Tweet, TweetLog, TweetUrl, UrlMap};
