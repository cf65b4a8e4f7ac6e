//! Cache locations.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Default base URL for card scans.
pub const DEFAULT_CARD_SCAN_BASE_URL: &str = "http://magiccards.info/scans/en";

/// Where images come from and where they are cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCacheConfig {
    /// Directory for card images.
    pub card_dir: PathBuf,
    /// Directory for token images.
    pub token_dir: PathBuf,
    /// `name url` index used to locate token images.
    pub token_index_file: PathBuf,
    /// Base of `<base>/<set>/<number><face>.jpg` scan URLs.
    pub card_scan_base_url: String,
}

impl ImageCacheConfig {
    /// Layout under a single cache root.
    ///
    /// Cards go to `<root>/pics/cards`, tokens to `<root>/pics/tokens`, and
    /// the token index is read from `<root>/lists/token-images.txt`.
    pub fn from_cache_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            card_dir: root.join("pics").join("cards"),
            token_dir: root.join("pics").join("tokens"),
            token_index_file: root.join("lists").join("token-images.txt"),
            card_scan_base_url: DEFAULT_CARD_SCAN_BASE_URL.to_string(),
        }
    }

    /// Layout under the platform cache directory.
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn default_dirs() -> Option<Self> {
        ProjectDirs::from("", "", "cardshell").map(|dirs| Self::from_cache_root(dirs.cache_dir()))
    }

    /// Use a different scan server.
    pub fn with_card_scan_base_url(mut self, url: impl Into<String>) -> Self {
        self.card_scan_base_url = url.into();
        self
    }

    /// Use a different token index.
    pub fn with_token_index_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_index_file = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cache_root() {
        let config = ImageCacheConfig::from_cache_root("/cache");
        assert_eq!(config.card_dir, Path::new("/cache/pics/cards"));
        assert_eq!(config.token_dir, Path::new("/cache/pics/tokens"));
        assert_eq!(
            config.token_index_file,
            Path::new("/cache/lists/token-images.txt")
        );
        assert_eq!(config.card_scan_base_url, DEFAULT_CARD_SCAN_BASE_URL);
    }

    #[test]
    fn test_builders() {
        let config = ImageCacheConfig::from_cache_root("/cache")
            .with_card_scan_base_url("http://127.0.0.1:9000/scans")
            .with_token_index_file("/etc/tokens.txt");
        assert_eq!(config.card_scan_base_url, "http://127.0.0.1:9000/scans");
        assert_eq!(config.token_index_file, Path::new("/etc/tokens.txt"));
    }
}
