use crate::foundation::core::{Canvas, Fps, Rgba8};
use crate::foundation::error::{FingersumError, FingersumResult};
use crate::render::RenderMode;
use crate::render::scene::Palette;
use crate::sequencer::Timings;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application settings, loaded from JSON.
///
/// Every field is optional in the file; missing ones take their defaults. Unknown fields are
/// rejected so typos don't silently fall back to defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Canvas background colour, `#rrggbb` or `#rrggbbaa`.
    pub background: Rgba8,
    /// Sampling rate for timeline renders.
    pub fps: Fps,
    /// Choreography pauses.
    pub timings: Timings,
    /// Initial render mode.
    pub mode: RenderMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Palette::default().background,
            fps: Fps::default(),
            timings: Timings::default(),
            mode: RenderMode::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FingersumResult<Self> {
        let cfg: AppConfig = serde_json::from_reader(r)
            .map_err(|e| FingersumError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config file.
    pub fn from_path(path: impl AsRef<Path>) -> FingersumResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FingersumError::config(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check value ranges serde cannot express.
    pub fn validate(&self) -> FingersumResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        Fps::new(self.fps.num, self.fps.den)?;
        if self.timings.count_ms == 0 || self.timings.relabel_ms == 0 {
            return Err(FingersumError::config(
                "timings.count_ms and timings.relabel_ms must be positive",
            ));
        }
        let t = &self.timings;
        for (name, ms) in [
            ("count_ms", t.count_ms),
            ("relabel_ms", t.relabel_ms),
            ("settle_ms", t.settle_ms),
        ] {
            if ms > Timings::MAX_PAUSE_MS {
                return Err(FingersumError::config(format!(
                    "timings.{name} must be at most {} ms, got {ms}",
                    Timings::MAX_PAUSE_MS
                )));
            }
        }
        Ok(())
    }

    /// Default palette with the configured background.
    pub fn palette(&self) -> Palette {
        Palette {
            background: self.background,
            ..Palette::default()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
