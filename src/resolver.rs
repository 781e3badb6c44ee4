// Media path resolution for the archived tweet log

use crate::config::ResolverConfig;
use crate::error::{Result, ResolverError};
use crate::store::{MediaEntry, Tweet, UrlMap, load_log, load_url_map, save_log};
use crate::utils::path::{file_stem, get_extension, has_suffix};
use crate::{log_debug, log_info};
use std::path::{Path, PathBuf};

/// Resolves every tweet's downloaded media files against the URL map
pub struct MediaResolver {
    config: ResolverConfig,
}

impl MediaResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Run the full batch: load, resolve every tweet in ascending id order,
    /// write the resolved log.
    ///
    /// Any error aborts the run before the output file is written.
    pub fn run(&self) -> Result<()> {
        log_info!(
            "Resolving media paths (workdir: {}, input: {})",
            self.config.working_dir.display(),
            self.config.log_path.display()
        );

        let mut log = load_log(&self.config.log_path)?;
        let url_map = load_url_map(&self.config.url_map_path)?;

        let total = log.len();
        for (i, (tid, tweet)) in log.iter_mut().enumerate() {
            log_debug!("Resolving media for tweet {}", tid);
            tweet.media = self.resolve_tweet(tweet, &url_map)?;

            if (i + 1) % self.config.progress_interval == 0 {
                println!("Resolved media paths of {}/{} tweets", i + 1, total);
            }
        }
        println!("Resolved media paths of {}/{} tweets", total, total);

        save_log(&log, &self.config.export_path)?;
        println!("Saved tweet log to {}.", self.config.export_path.display());

        log_info!("Run complete ({} tweets)", total);
        Ok(())
    }

    /// Build the ordered media list for one tweet.
    ///
    /// Replaces whatever `media` list the tweet carried before; never merges.
    pub fn resolve_tweet(&self, tweet: &Tweet, url_map: &UrlMap) -> Result<Vec<MediaEntry>> {
        let mut media = Vec::new();

        for url_ref in &tweet.urls {
            let url = &url_ref.expanded_url;
            let name = url_map
                .get(url)
                .ok_or_else(|| ResolverError::UnmappedUrl(url.clone()))?;

            let dir = self.config.working_dir.join(name);
            if !dir.exists() {
                // expected when the media was never downloaded
                log_debug!("Skipping {}: no directory {}", url, dir.display());
                continue;
            }

            // read_dir order is platform-dependent; sort for stable output
            let mut entries: Vec<String> = std::fs::read_dir(&dir)?
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            entries.sort();

            for file in entries {
                if !self.is_image(Path::new(&file)) {
                    continue;
                }

                let img_path = dir.join(&file);
                let mut resolved = url.clone();
                if has_suffix(&img_path, &self.config.thumbnail_suffix)
                    && let Some(video) = self.find_local_video(&img_path)
                {
                    resolved = video.to_string_lossy().into_owned();
                }
                media.push(MediaEntry {
                    file: img_path,
                    resolved,
                });
            }
        }

        Ok(media)
    }

    fn is_image(&self, path: &Path) -> bool {
        self.config.image_formats.contains(&get_extension(path))
    }

    /// Find the video file a thumbnail stands in for: same base name with
    /// the thumbnail suffix stripped, extensions tried in priority order.
    pub fn find_local_video(&self, thumbnail: &Path) -> Option<PathBuf> {
        let stem = file_stem(thumbnail);
        let stem = stem.to_string_lossy();
        let base = stem.strip_suffix(&self.config.thumbnail_suffix)?;

        for ext in &self.config.video_formats {
            let candidate = PathBuf::from(format!("{}{}", base, ext));
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{TweetLog, TweetUrl};
    use crate::utils::fs::dump_json;
    use std::collections::HashMap;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_config(root: &Path) -> ResolverConfig {
        ResolverConfig {
            working_dir: root.join("media"),
            log_path: root.join("log.bin"),
            url_map_path: root.join("url_to_name.json"),
            export_path: root.join("log_media_resolved.bin"),
            ..Default::default()
        }
    }

    fn tweet_with_url(url: &str) -> Tweet {
        Tweet {
            user: "someone".to_string(),
            urls: vec![TweetUrl {
                url: "https://t.co/x".to_string(),
                expanded_url: url.to_string(),
            }],
            ..Default::default()
        }
    }

    fn media_dir(tmp: &TempDir, name: &str, files: &[&str]) -> PathBuf {
        let dir = tmp.path().join("media").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for file in files {
            std::fs::write(dir.join(file), b"x").unwrap();
        }
        dir
    }

    fn url_map(url: &str, name: &str) -> UrlMap {
        let mut map = UrlMap::new();
        map.insert(url.to_string(), name.to_string());
        map
    }

    #[test]
    fn missing_directory_produces_no_entries() {
        let tmp = TempDir::new().unwrap();
        let resolver = MediaResolver::new(test_config(tmp.path()));

        let tweet = tweet_with_url("https://example.com/a");
        let map = url_map("https://example.com/a", "nonexistent");

        assert!(resolver.resolve_tweet(&tweet, &map).unwrap().is_empty());
    }

    #[test]
    fn plain_image_resolves_to_original_url() {
        let tmp = TempDir::new().unwrap();
        let dir = media_dir(&tmp, "abc", &["photo.jpg"]);
        let resolver = MediaResolver::new(test_config(tmp.path()));

        let tweet = tweet_with_url("https://example.com/a");
        let map = url_map("https://example.com/a", "abc");

        let media = resolver.resolve_tweet(&tweet, &map).unwrap();
        assert_eq!(
            media,
            vec![MediaEntry {
                file: dir.join("photo.jpg"),
                resolved: "https://example.com/a".to_string(),
            }]
        );
    }

    #[test]
    fn thumbnail_resolves_to_local_video() {
        let tmp = TempDir::new().unwrap();
        let dir = media_dir(&tmp, "abc", &["clip_thumb.jpg", "clip.mp4"]);
        let resolver = MediaResolver::new(test_config(tmp.path()));

        let tweet = tweet_with_url("https://example.com/a");
        let map = url_map("https://example.com/a", "abc");

        let media = resolver.resolve_tweet(&tweet, &map).unwrap();
        assert_eq!(
            media,
            vec![MediaEntry {
                file: dir.join("clip_thumb.jpg"),
                resolved: dir.join("clip.mp4").to_string_lossy().into_owned(),
            }]
        );
    }

    #[test]
    fn thumbnail_without_video_falls_back_to_url() {
        let tmp = TempDir::new().unwrap();
        let dir = media_dir(&tmp, "abc", &["clip_thumb.jpg"]);
        let resolver = MediaResolver::new(test_config(tmp.path()));

        let tweet = tweet_with_url("https://example.com/a");
        let map = url_map("https://example.com/a", "abc");

        let media = resolver.resolve_tweet(&tweet, &map).unwrap();
        assert_eq!(media[0].file, dir.join("clip_thumb.jpg"));
        assert_eq!(media[0].resolved, "https://example.com/a");
    }

    #[test]
    fn video_extensions_are_tried_in_priority_order() {
        let tmp = TempDir::new().unwrap();
        let dir = media_dir(&tmp, "abc", &["clip_thumb.jpg", "clip.webm", "clip.mp4"]);
        let resolver = MediaResolver::new(test_config(tmp.path()));

        let video = resolver
            .find_local_video(&dir.join("clip_thumb.jpg"))
            .unwrap();
        assert_eq!(video, dir.join("clip.mp4"));
    }

    #[test]
    fn non_image_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let dir = media_dir(&tmp, "abc", &["notes.txt", "clip.mp4", "photo.png"]);
        let resolver = MediaResolver::new(test_config(tmp.path()));

        let tweet = tweet_with_url("https://example.com/a");
        let map = url_map("https://example.com/a", "abc");

        let media = resolver.resolve_tweet(&tweet, &map).unwrap();
        // the video never appears as media itself, only the image
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].file, dir.join("photo.png"));
    }

    #[test]
    fn directory_entries_are_matched_in_name_order() {
        let tmp = TempDir::new().unwrap();
        let dir = media_dir(&tmp, "abc", &["b.jpg", "a.jpg", "c.png"]);
        let resolver = MediaResolver::new(test_config(tmp.path()));

        let tweet = tweet_with_url("https://example.com/a");
        let map = url_map("https://example.com/a", "abc");

        let media = resolver.resolve_tweet(&tweet, &map).unwrap();
        let files: Vec<PathBuf> = media.into_iter().map(|m| m.file).collect();
        assert_eq!(files, vec![dir.join("a.jpg"), dir.join("b.jpg"), dir.join("c.png")]);
    }

    #[test]
    fn unmapped_url_is_a_fatal_error() {
        let tmp = TempDir::new().unwrap();
        let resolver = MediaResolver::new(test_config(tmp.path()));

        let tweet = tweet_with_url("https://example.com/unmapped");
        let err = resolver.resolve_tweet(&tweet, &UrlMap::new()).unwrap_err();
        assert!(matches!(err, ResolverError::UnmappedUrl(url) if url == "https://example.com/unmapped"));
    }

    #[test]
    fn run_rewrites_media_and_exports_whole_log() {
        let tmp = TempDir::new().unwrap();
        let dir = media_dir(&tmp, "abc", &["clip_thumb.jpg", "clip.mp4"]);
        let config = test_config(tmp.path());

        let mut tweet = tweet_with_url("https://example.com/a");
        // stale entry from an earlier run; must be rebuilt, not merged
        tweet.media = vec![MediaEntry {
            file: PathBuf::from("stale.jpg"),
            resolved: "stale".to_string(),
        }];

        let mut log = TweetLog::new();
        log.insert("1".to_string(), tweet);
        log.insert(
            "2".to_string(),
            tweet_with_url("https://example.com/missing"),
        );
        save_log(&log, &config.log_path).unwrap();

        let mut map = HashMap::new();
        map.insert("https://example.com/a".to_string(), "abc".to_string());
        map.insert("https://example.com/missing".to_string(), "gone".to_string());
        dump_json(&map, &config.url_map_path).unwrap();

        MediaResolver::new(config.clone()).run().unwrap();

        let resolved = load_log(&config.export_path).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(
            resolved["1"].media,
            vec![MediaEntry {
                file: dir.join("clip_thumb.jpg"),
                resolved: dir.join("clip.mp4").to_string_lossy().into_owned(),
            }]
        );
        assert!(resolved["2"].media.is_empty());
        // input is left untouched
        assert_eq!(load_log(&config.log_path).unwrap()["1"].media.len(), 1);
    }

    #[test]
    fn run_aborts_without_output_on_unmapped_url() {
        let tmp = TempDir::new().unwrap();
        media_dir(&tmp, "abc", &["photo.jpg"]);
        let config = test_config(tmp.path());

        let mut log = TweetLog::new();
        log.insert("1".to_string(), tweet_with_url("https://example.com/a"));
        save_log(&log, &config.log_path).unwrap();
        dump_json(&HashMap::<String, String>::new(), &config.url_map_path).unwrap();

        assert!(MediaResolver::new(config.clone()).run().is_err());
        assert!(!config.export_path.exists());
    }
}
