//! Image keys.
//!
//! A key is a two-character prefix followed by an opaque identifier:
//!
//! - `c:Delver of Secrets|ISD`: card, front face
//! - `c:Delver of Secrets|ISD$alt`: card, back face
//! - `t:g_1_1_saproling`: token

use std::fmt;

use crate::error::{ImageError, Result};

/// Prefix of card keys.
pub const CARD_PREFIX: &str = "c:";
/// Prefix of token keys.
pub const TOKEN_PREFIX: &str = "t:";
/// Suffix marking the back face of a double-faced card.
pub const BACKFACE_SUFFIX: &str = "$alt";

/// A parsed image key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageKey {
    /// A card printing.
    Card {
        /// Identifier understood by the card database, without the face suffix.
        id: String,
        /// Whether the back face is wanted.
        backface: bool,
    },
    /// A token image.
    Token {
        /// Token name; the cached file is `<name>.jpg`.
        name: String,
    },
}

impl ImageKey {
    /// Parse a raw key.
    pub fn parse(raw: &str) -> Result<Self> {
        if let Some(rest) = raw.strip_prefix(CARD_PREFIX) {
            let (id, backface) = match rest.strip_suffix(BACKFACE_SUFFIX) {
                Some(front) => (front, true),
                None => (rest, false),
            };
            return Ok(Self::Card {
                id: id.to_string(),
                backface,
            });
        }
        if let Some(name) = raw.strip_prefix(TOKEN_PREFIX) {
            return Ok(Self::Token {
                name: name.to_string(),
            });
        }
        Err(ImageError::UnknownPrefix(raw.to_string()))
    }

    /// Whether this is a card key.
    pub fn is_card(&self) -> bool {
        matches!(self, Self::Card { .. })
    }

    /// Whether this is a back-face card key.
    pub fn is_backface(&self) -> bool {
        matches!(self, Self::Card { backface: true, .. })
    }
}

impl std::str::FromStr for ImageKey {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card { id, backface } => {
                write!(f, "{CARD_PREFIX}{id}")?;
                if *backface {
                    f.write_str(BACKFACE_SUFFIX)?;
                }
                Ok(())
            }
            Self::Token { name } => write!(f, "{TOKEN_PREFIX}{name}"),
        }
    }
}
