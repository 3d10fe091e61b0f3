//! Sprite loading with placeholder fallback
//!
//! A missing or unreadable image never stops the game: a flat-colored box
//! of the expected size stands in for it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0} is empty")]
    Empty(PathBuf),
}

/// Pixel source for a sprite
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteData {
    /// Encoded image bytes, decoded by the renderer backend
    Encoded(Vec<u8>),
    /// Solid box drawn in place of a missing image
    Placeholder { color: [u8; 3] },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: f32,
    pub height: f32,
    pub data: SpriteData,
}

impl Sprite {
    pub fn placeholder(width: f32, height: f32, color: [u8; 3]) -> Self {
        Self {
            width,
            height,
            data: SpriteData::Placeholder { color },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.data, SpriteData::Placeholder { .. })
    }
}

/// Placeholder colors for the actor and zombies
pub const ACTOR_PLACEHOLDER: [u8; 3] = [255, 100, 100];
pub const ZOMBIE_PLACEHOLDER: [u8; 3] = [0, 150, 0];

fn read_sprite(path: &Path) -> Result<Vec<u8>, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(AssetError::Empty(path.to_path_buf()));
    }
    Ok(bytes)
}

/// Sprites keyed by asset name, loaded once
#[derive(Debug, Default)]
pub struct SpriteCache {
    root: PathBuf,
    sprites: HashMap<String, Sprite>,
}

impl SpriteCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sprites: HashMap::new(),
        }
    }

    /// Fetch a sprite, loading it (or its placeholder) on first use
    pub fn get(&mut self, key: &str, width: f32, height: f32, fallback: [u8; 3]) -> &Sprite {
        let root = &self.root;
        self.sprites.entry(key.to_owned()).or_insert_with(|| {
            match read_sprite(&root.join(key)) {
                Ok(bytes) => Sprite {
                    width,
                    height,
                    data: SpriteData::Encoded(bytes),
                },
                Err(e) => {
                    log::warn!("{e}; using placeholder");
                    Sprite::placeholder(width, height, fallback)
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sprite_gets_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = SpriteCache::new(dir.path());
        let sprite = cache.get("torcher.png", 64.0, 64.0, ACTOR_PLACEHOLDER);
        assert!(sprite.is_placeholder());
        assert_eq!((sprite.width, sprite.height), (64.0, 64.0));
        assert_eq!(sprite.data, SpriteData::Placeholder { color: ACTOR_PLACEHOLDER });
    }

    #[test]
    fn test_present_sprite_is_loaded_once() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("zombie.png"), [1u8, 2, 3]).unwrap();
        let mut cache = SpriteCache::new(dir.path());
        assert!(!cache.get("zombie.png", 48.0, 48.0, ZOMBIE_PLACEHOLDER).is_placeholder());

        std::fs::remove_file(dir.path().join("zombie.png")).unwrap();
        assert!(!cache.get("zombie.png", 48.0, 48.0, ZOMBIE_PLACEHOLDER).is_placeholder());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_empty_file_is_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blank.png"), b"").unwrap();
        let mut cache = SpriteCache::new(dir.path());
        assert!(cache.get("blank.png", 48.0, 48.0, ZOMBIE_PLACEHOLDER).is_placeholder());
    }
}
