//! Mapping image keys to a download URL and a cache file.

use std::path::PathBuf;
use std::rc::Rc;

use super::config::ImageCacheConfig;
use super::key::ImageKey;
use super::token_index::TokenIndex;
use crate::error::{ImageError, Result};

/// A card printing as known to the card database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperCard {
    /// Card name.
    pub name: String,
    /// Edition code as used by the database.
    pub edition: String,
    /// Whether the card has a second face.
    pub has_other_face: bool,
    /// Cache file stem for the front face.
    pub front_image: String,
    /// Cache file stem for the back face, if different.
    pub back_image: Option<String>,
}

impl PaperCard {
    /// A single-faced card.
    pub fn new(
        name: impl Into<String>,
        edition: impl Into<String>,
        front_image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            edition: edition.into(),
            has_other_face: false,
            front_image: front_image.into(),
            back_image: None,
        }
    }

    /// Mark the card double-faced with the given back image stem.
    pub fn with_back_face(mut self, back_image: impl Into<String>) -> Self {
        self.has_other_face = true;
        self.back_image = Some(back_image.into());
        self
    }

    /// Cache file stem for a face.
    pub fn image_file_name(&self, backface: bool) -> &str {
        match (&self.back_image, backface) {
            (Some(back), true) => back,
            _ => &self.front_image,
        }
    }
}

/// Card and edition lookups the fetcher depends on.
///
/// Implemented by the application's card database.
pub trait CardDatabase {
    /// The printing named by a card key identifier.
    fn card_for_key(&self, id: &str) -> Option<PaperCard>;

    /// Collector number of a card in an edition.
    fn collector_number(&self, name: &str, edition: &str) -> Option<u32>;

    /// Short (two or three letter) code of an edition.
    fn edition_short_code(&self, edition: &str) -> Option<String>;

    /// Secondary download URL used when no collector number is known.
    fn fallback_image_url(&self, card: &PaperCard, backface: bool) -> Option<String>;
}

/// Where one image comes from and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLocation {
    /// Remote URL.
    pub url: String,
    /// Cache file path; also the dedup key for in-flight downloads.
    pub destination: PathBuf,
}

/// Resolves keys against the card database and the token index.
pub struct ImageResolver {
    config: ImageCacheConfig,
    database: Rc<dyn CardDatabase>,
    tokens: TokenIndex,
}

impl ImageResolver {
    /// Resolver reading the token index named in `config`.
    pub fn new(config: ImageCacheConfig, database: Rc<dyn CardDatabase>) -> Self {
        let tokens = TokenIndex::new(config.token_index_file.clone());
        Self {
            config,
            database,
            tokens,
        }
    }

    /// Replace the token index.
    pub fn with_token_index(mut self, tokens: TokenIndex) -> Self {
        self.tokens = tokens;
        self
    }

    /// The cache configuration.
    pub fn config(&self) -> &ImageCacheConfig {
        &self.config
    }

    /// The token index.
    pub fn token_index(&self) -> &TokenIndex {
        &self.tokens
    }

    /// Resolve a key.
    pub fn resolve(&self, key: &ImageKey) -> Result<ImageLocation> {
        match key {
            ImageKey::Card { id, backface } => self.resolve_card(key, id, *backface),
            ImageKey::Token { name } => self.resolve_token(name),
        }
    }

    fn resolve_card(&self, key: &ImageKey, id: &str, backface: bool) -> Result<ImageLocation> {
        let card = self
            .database
            .card_for_key(id)
            .ok_or_else(|| ImageError::CardNotFound(key.to_string()))?;

        let file_name = format!("{}.jpg", card.image_file_name(backface));
        let destination = self.config.card_dir.join(file_name);

        if let Some(url) = self.scan_url(&card, backface) {
            return Ok(ImageLocation { url, destination });
        }

        let url = self
            .database
            .fallback_image_url(&card, backface)
            .ok_or_else(|| ImageError::NoImageUrl(key.to_string()))?;
        Ok(ImageLocation { url, destination })
    }

    fn scan_url(&self, card: &PaperCard, backface: bool) -> Option<String> {
        let number = self.database.collector_number(&card.name, &card.edition)?;
        let set = self.database.edition_short_code(&card.edition)?.to_lowercase();
        let face = match (card.has_other_face, backface) {
            (false, _) => "",
            (true, false) => "a",
            (true, true) => "b",
        };
        let base = self.config.card_scan_base_url.trim_end_matches('/');
        Some(format!("{base}/{set}/{number}{face}.jpg"))
    }

    fn resolve_token(&self, name: &str) -> Result<ImageLocation> {
        let file_name = format!("{name}.jpg");
        let url = self
            .tokens
            .url_for(&file_name)
            .ok_or_else(|| ImageError::TokenNotFound {
                name: file_name.clone(),
                index: self.tokens.path().display().to_string(),
            })?
            .to_string();
        Ok(ImageLocation {
            url,
            destination: self.config.token_dir.join(file_name),
        })
    }
}

impl std::fmt::Debug for ImageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageResolver")
            .field("config", &self.config)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
