use crate::foundation::error::{FingersumError, FingersumResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Virtual time in milliseconds since the session clock started.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Time zero.
    pub const ZERO: Self = Self(0);

    /// Add `ms` with saturating arithmetic.
    pub fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Distance from `earlier` to `self`, zero if `earlier` is later.
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Absolute 0-based frame index of a sampled timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FingersumResult<Self> {
        if den == 0 {
            return Err(FingersumError::config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FingersumError::config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Timestamp of frame `idx`, floored to whole milliseconds.
    ///
    /// A zero numerator never advances: every frame maps to `u64::MAX`.
    pub fn frame_to_millis(self, idx: FrameIndex) -> Millis {
        let ms = (u128::from(idx.0) * 1000 * u128::from(self.den))
            .checked_div(u128::from(self.num))
            .unwrap_or(u128::MAX);
        Millis(u64::try_from(ms).unwrap_or(u64::MAX))
    }

    /// Number of frames needed to cover `duration_ms`, rounding up.
    pub fn frames_covering(self, duration_ms: u64) -> u64 {
        let num = u128::from(duration_ms) * u128::from(self.num);
        let den = 1000 * u128::from(self.den);
        if den == 0 {
            return u64::MAX;
        }
        u64::try_from(num.div_ceil(den)).unwrap_or(u64::MAX)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas (both sides non-zero).
    pub fn new(width: u32, height: u32) -> FingersumResult<Self> {
        if width == 0 || height == 0 {
            return Err(FingersumError::config(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Full canvas rectangle in scene units.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Rectangle given as fractions of the canvas size.
    pub fn fraction_rect(self, x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        Rect::new(x0 * w, y0 * h, x1 * w, y1 * h)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
        }
    }
}

/// Straight-alpha RGBA8 colour.
///
/// Serialized as a `#rrggbb` or `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> FingersumResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| FingersumError::config(format!("colour '{s}' must start with '#'")))?;
        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FingersumError::config(format!(
                "colour '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        let a = if hex.len() == 8 { channel(6) } else { 255 };
        Ok(Self {
            r: channel(0),
            g: channel(2),
            b: channel(4),
            a,
        })
    }

    /// `#rrggbb` without alpha, as used by SVG paint attributes.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = FingersumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        if c.a == 255 {
            c.to_hex_rgb()
        } else {
            format!("{}{:02x}", c.to_hex_rgb(), c.a)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
