//! Card face and card back image paths.
//!
//! Faces live at `{base}/cards/{suit}_{rank}.{ext}` (`spades_10.png`,
//! `hearts_queen.png`); backs at `{base}/backs/{name}.{ext}`. Paths are only
//! computed, never read.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Card;
use crate::settings::DEFAULT_CARD_BACK;

/// Back designs shipped with the game.
pub const KNOWN_BACKS: &[&str] = &["classic", "ocean", "crimson", "forest"];

#[derive(Debug, Clone)]
pub struct AssetResolver {
    base: PathBuf,
    ext: String,
}

impl AssetResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            ext: "png".to_string(),
        }
    }

    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `{suit}_{rank}` file stem for a card face.
    pub fn card_stem(card: Card) -> String {
        format!("{}_{}", card.suit.name(), card.rank.name())
    }

    pub fn card_path(&self, card: Card) -> PathBuf {
        self.base
            .join("cards")
            .join(format!("{}.{}", Self::card_stem(card), self.ext))
    }

    /// Path of a back design; unknown names use the default back.
    pub fn back_path(&self, name: &str) -> PathBuf {
        let name = resolve_back(name);
        self.base.join("backs").join(format!("{name}.{}", self.ext))
    }
}

/// The known back design matching `name`, or the default one.
pub fn resolve_back(name: &str) -> &'static str {
    let wanted = name.trim().to_ascii_lowercase();
    match KNOWN_BACKS.iter().find(|&&b| b == wanted) {
        Some(b) => *b,
        None => {
            debug!(requested = name, "Unknown card back; using default");
            DEFAULT_CARD_BACK
        }
    }
}
