//! Turning finger state into pictures.
//!
//! A [`HandRenderer`] maps a [`FingerSnapshot`] to a backend-agnostic [`HandScene`]. Scenes can be
//! exported as SVG ([`svg::scene_to_svg`]) or rasterized ([`cpu::CpuBackend`]). Renderers are pure:
//! the same snapshot always yields the same scene.

/// Detailed hands with creases and nails.
pub mod anatomical;
/// Raster backend contract and frame type.
pub mod backend;
/// CPU raster backend.
pub mod cpu;
/// Result overlay with close affordance.
pub mod overlay;
/// Photo-backed hands with markers at fixed anchors.
pub mod photo;
/// Scene model shared by all renderers.
pub mod scene;
/// Block-shaped hands.
pub mod simplified;
/// SVG export.
pub mod svg;

use crate::foundation::core::Canvas;
use crate::sequencer::FingerSnapshot;
use scene::{HandScene, Palette};
use std::fmt;
use std::str::FromStr;

pub use photo::PhotoPresence;

/// Visual style of the hands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Block-shaped hands.
    #[default]
    Simplified,
    /// Hands with creases, nails and splayed fingers.
    Anatomical,
    /// User-supplied photos with markers.
    Photo,
}

impl RenderMode {
    /// All modes in menu order.
    pub const ALL: [RenderMode; 3] = [Self::Simplified, Self::Anatomical, Self::Photo];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simplified => "simplified",
            Self::Anatomical => "anatomical",
            Self::Photo => "photo",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown render mode '{s}' (expected simplified, anatomical or photo)"))
    }
}

/// Draws both hands for a snapshot of the counting state.
pub trait HandRenderer: Send {
    /// Which style this renderer implements.
    fn mode(&self) -> RenderMode;
    /// Build the scene for `snap`. Must not depend on anything but `snap` and construction-time
    /// configuration.
    fn render(&self, snap: &FingerSnapshot) -> HandScene;
}

/// Construct the renderer for `mode`.
///
/// `photos` only matters for [`RenderMode::Photo`].
pub fn create_renderer(
    mode: RenderMode,
    canvas: Canvas,
    palette: Palette,
    photos: PhotoPresence,
) -> Box<dyn HandRenderer> {
    match mode {
        RenderMode::Simplified => Box::new(simplified::SimplifiedRenderer::new(canvas, palette)),
        RenderMode::Anatomical => Box::new(anatomical::AnatomicalRenderer::new(canvas, palette)),
        RenderMode::Photo => Box::new(photo::PhotoRenderer::new(canvas, palette, photos)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mod.rs"]
mod tests;
