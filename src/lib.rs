//! Fingersum animates single-digit additions by counting on ten fingers.
//!
//! Text such as `3 + 4` is parsed and validated, then a timed sequencer labels the fingers of
//! two hands: the first operand is counted, the second is counted provisionally and relabeled with
//! running totals, and the sum is revealed. Three interchangeable renderers draw the hands.
//!
//! - Feed input to a [`Session`] and trigger a run
//! - Advance its virtual clock, or render a whole run into a [`FrameSink`]
//! - Draw the current state with any [`RenderMode`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

/// Hand photo decoding and storage.
pub mod assets;
/// JSON application settings.
pub mod config;
/// Frame sinks.
pub mod encode;
pub(crate) mod expression;
/// Quick-test examples.
pub mod gallery;
mod operands;
/// Hand renderers and raster backend.
pub mod render;
/// Timed finger-counting state machine.
pub mod sequencer;
/// Input, trigger and overlay handling.
pub mod session;
mod validate;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Millis, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{FingersumError, FingersumResult};

pub use crate::assets::PhotoStore;
pub use crate::config::AppConfig;
pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::expression::{ParseError, parse_expression, parse_operands};
pub use crate::gallery::{GalleryEntry, gallery};
pub use crate::operands::{OperandPair, Operands};
pub use crate::render::backend::{FrameRGBA, RasterBackend};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::scene::{HandScene, Palette, SceneItem};
pub use crate::render::svg::{SvgOptions, scene_to_svg};
pub use crate::render::{HandRenderer, PhotoPresence, RenderMode, create_renderer};
pub use crate::sequencer::{
    FingerSlots, FingerSnapshot, Hand, Label, LabelKind, Phase, RunId, Sequencer, Slot, Timings,
};
pub use crate::session::{ResultSummary, RunBlocked, RenderStats, Session};
pub use crate::validate::{Rejection, check_expression, validate};
