// Tweet log and URL map persistence

use crate::error::{Result, ResolverError};
use crate::utils::fs::{atomic_write, load_json};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// The archived tweet collection, keyed by tweet id.
///
/// A `BTreeMap` so iteration (and therefore batch processing) runs in
/// ascending key order.
pub type TweetLog = BTreeMap<String, Tweet>;

/// Expanded URL to downloaded-media directory name
pub type UrlMap = HashMap<String, String>;

/// One archived tweet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    /// username of the account who posted the tweet
    pub user: String,
    /// the text of the tweet
    pub text: String,
    pub date: String,
    /// id of the first tweet in the thread this tweet is in
    #[serde(default)]
    pub thread_id: Option<String>,
    /// URL references carried by the tweet
    #[serde(default)]
    pub urls: Vec<TweetUrl>,
    /// resolved media entries, rebuilt in full on every resolver run
    #[serde(default)]
    pub media: Vec<MediaEntry>,
}

/// A URL reference inside a tweet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetUrl {
    /// the twitter shortened url
    pub url: String,
    /// the original url
    pub expanded_url: String,
}

/// One resolved media item: a local image file and the path chosen to
/// represent it (a local video for thumbnails, the remote URL otherwise)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub file: PathBuf,
    pub resolved: String,
}

/// Load the binary tweet log
pub fn load_log(path: &Path) -> Result<TweetLog> {
    let data = std::fs::read(path).map_err(|e| {
        ResolverError::Store(format!("Failed to read tweet log {}: {}", path.display(), e))
    })?;
    Ok(bincode::deserialize(&data)?)
}

/// Write the binary tweet log atomically
pub fn save_log(log: &TweetLog, path: &Path) -> Result<()> {
    let encoded = bincode::serialize(log)?;
    atomic_write(path, &encoded)
}

/// Load the JSON URL-to-name map
pub fn load_url_map(path: &Path) -> Result<UrlMap> {
    load_json(path)
}
