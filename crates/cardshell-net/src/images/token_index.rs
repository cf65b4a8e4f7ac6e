//! Token name to URL index.
//!
//! The index file holds one `name url` pair per line, for example
//!
//! ```text
//! # Generated token list
//! g_1_1_saproling.jpg https://example.com/tokens/saproling.jpg
//! ```
//!
//! It is read on the first lookup and kept for the life of the index.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cardshell_core::logging::targets;

/// Lazily loaded token index.
#[derive(Debug)]
pub struct TokenIndex {
    path: PathBuf,
    entries: OnceCell<HashMap<String, String>>,
}

impl TokenIndex {
    /// Index backed by `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: OnceCell::new(),
        }
    }

    /// Index with fixed entries; the file is never read.
    pub fn from_entries<I, K, V>(path: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            path: path.into(),
            entries: OnceCell::from(map),
        }
    }

    /// Path of the index file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file has been read.
    pub fn is_loaded(&self) -> bool {
        self.entries.get().is_some()
    }

    /// URL for a token file name such as `g_1_1_saproling.jpg`.
    pub fn url_for(&self, file_name: &str) -> Option<&str> {
        self.entries().get(file_name).map(String::as_str)
    }

    /// Number of entries, loading the file if needed.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether the index is empty, loading the file if needed.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> &HashMap<String, String> {
        self.entries.get_or_init(|| load(&self.path))
    }
}

fn load(path: &Path) -> HashMap<String, String> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(
                target: targets::IMAGES,
                path = %path.display(),
                error = %err,
                "token index unreadable, token images unavailable"
            );
            return HashMap::new();
        }
    };

    let entries = parse(&contents, path);
    tracing::debug!(
        target: targets::IMAGES,
        path = %path.display(),
        count = entries.len(),
        "loaded token index"
    );
    entries
}

fn parse(contents: &str, path: &Path) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once(char::is_whitespace) {
            Some((name, url)) if !url.trim().is_empty() => {
                entries.insert(name.to_string(), url.trim().to_string());
            }
            _ => {
                tracing::warn!(
                    target: targets::IMAGES,
                    path = %path.display(),
                    line = number + 1,
                    "malformed token index line"
                );
            }
        }
    }
    entries
}
