use std::path::Path;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::foundation::error::{FingersumError, FingersumResult};
use crate::render::PhotoPresence;
use crate::sequencer::Hand;

/// Decoded hand photos, at most one per hand.
#[derive(Clone, Debug, Default)]
pub struct PhotoStore {
    left: Option<PreparedImage>,
    right: Option<PreparedImage>,
}

impl PhotoStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes` and make it `hand`'s photo, replacing any previous one.
    ///
    /// On a decode failure the previous photo is kept.
    #[tracing::instrument(level = "debug", skip(self, bytes), fields(len = bytes.len()))]
    pub fn attach(&mut self, hand: Hand, bytes: &[u8]) -> FingersumResult<()> {
        let img = decode_image(bytes)?;
        tracing::debug!(width = img.width, height = img.height, "photo attached");
        *self.slot_mut(hand) = Some(img);
        Ok(())
    }

    /// Read and attach a photo file.
    pub fn attach_path(&mut self, hand: Hand, path: &Path) -> FingersumResult<()> {
        let bytes = std::fs::read(path).map_err(|e| {
            FingersumError::asset(format!("read photo '{}': {e}", path.display()))
        })?;
        self.attach(hand, &bytes)
    }

    /// Forget `hand`'s photo.
    pub fn clear(&mut self, hand: Hand) {
        *self.slot_mut(hand) = None;
    }

    /// `hand`'s photo, if attached.
    pub fn get(&self, hand: Hand) -> Option<&PreparedImage> {
        match hand {
            Hand::Left => self.left.as_ref(),
            Hand::Right => self.right.as_ref(),
        }
    }

    /// Which photos are attached.
    pub fn presence(&self) -> PhotoPresence {
        PhotoPresence {
            left: self.left.is_some(),
            right: self.right.is_some(),
        }
    }

    fn slot_mut(&mut self, hand: Hand) -> &mut Option<PreparedImage> {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
