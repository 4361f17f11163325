//! Interactive surface: text input, trigger, render mode, photos and the result overlay.

use std::path::Path;

use crate::assets::PhotoStore;
use crate::config::AppConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::expression::parse_operands;
use crate::foundation::core::{FrameIndex, Millis, Point};
use crate::foundation::error::{FingersumError, FingersumResult};
use crate::gallery::EXAMPLES;
use crate::operands::{OperandPair, Operands};
use crate::render::backend::{FrameRGBA, RasterBackend};
use crate::render::overlay::{OverlayHit, ResultOverlay};
use crate::render::scene::{HandScene, Palette};
use crate::render::{HandRenderer, RenderMode, create_renderer};
use crate::sequencer::{Hand, RunId, Sequencer};
use crate::validate::{Rejection, validate};

/// Why [`Session::run`] did not start a run.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunBlocked {
    /// The current input does not validate.
    #[error("{0}")]
    Invalid(Rejection),
    /// A run is already in progress.
    #[error("a run is already in progress")]
    Busy,
}

/// What the result overlay displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResultSummary {
    /// Left operand.
    pub a: u8,
    /// Right operand.
    pub b: u8,
    /// `a + b`.
    pub sum: u8,
}

impl From<Operands> for ResultSummary {
    fn from(ops: Operands) -> Self {
        Self {
            a: ops.a(),
            b: ops.b(),
            sum: ops.sum(),
        }
    }
}

/// Timeline render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames delivered to the sink.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames reused because nothing visible changed since the previous one.
    pub frames_elided: u64,
}

/// One user's view of the app.
///
/// Owns the sequencer; input edits that change the operand pair supersede any run in flight.
pub struct Session {
    config: AppConfig,
    palette: Palette,
    input: String,
    pair: OperandPair,
    validation: Result<Operands, Rejection>,
    sequencer: Sequencer,
    mode: RenderMode,
    photos: PhotoStore,
    renderer: Box<dyn HandRenderer>,
    overlay: ResultOverlay,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("input", &self.input)
            .field("validation", &self.validation)
            .field("mode", &self.mode)
            .field("sequencer", &self.sequencer)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Session {
    /// Fresh session with empty input.
    pub fn new(config: AppConfig) -> Self {
        let palette = config.palette();
        let photos = PhotoStore::new();
        let renderer = create_renderer(config.mode, config.canvas, palette, photos.presence());
        Self {
            palette,
            input: String::new(),
            pair: OperandPair::UNPARSED,
            validation: Err(Rejection::UnparsedExpression),
            sequencer: Sequencer::new(config.timings),
            mode: config.mode,
            photos,
            renderer,
            overlay: ResultOverlay::new(config.canvas),
            config,
        }
    }

    /// Settings this session was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replace the input text.
    ///
    /// When the parsed operand pair differs from the previous one, the fingers, highlight and
    /// result are reset and any run in flight is superseded.
    #[tracing::instrument(level = "debug", skip(self, text))]
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        let pair = parse_operands(&self.input);
        if pair != self.pair {
            self.pair = pair;
            self.sequencer.invalidate();
        }
        self.validation = validate(&self.pair);
        tracing::debug!(input = %self.input, ok = self.validation.is_ok(), "input updated");
    }

    /// Copy gallery example `index` into the input.
    ///
    /// Returns `false` for an index past the end of the gallery.
    pub fn select_example(&mut self, index: usize) -> bool {
        match EXAMPLES.get(index) {
            Some(expr) => {
                self.set_input(*expr);
                true
            }
            None => false,
        }
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Operands parsed from the current input.
    pub fn operand_pair(&self) -> OperandPair {
        self.pair
    }

    /// Validation outcome for the current input.
    pub fn validation(&self) -> Result<Operands, Rejection> {
        self.validation
    }

    /// Whether [`Session::run`] would start a run right now.
    pub fn can_run(&self) -> bool {
        self.validation.is_ok() && !self.sequencer.is_running()
    }

    /// Trigger a run for the current input.
    pub fn run(&mut self) -> Result<RunId, RunBlocked> {
        let ops = self.validation.map_err(RunBlocked::Invalid)?;
        self.sequencer.start(ops).ok_or(RunBlocked::Busy)
    }

    /// Switch render style. Finger state is untouched.
    pub fn set_mode(&mut self, mode: RenderMode) {
        if mode != self.mode {
            tracing::debug!(from = %self.mode, to = %mode, "render mode changed");
            self.mode = mode;
            self.rebuild_renderer();
        }
    }

    /// Active render style.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Decode and attach a hand photo. On failure the previous photo stays.
    pub fn attach_photo(&mut self, hand: Hand, bytes: &[u8]) -> FingersumResult<()> {
        self.photos.attach(hand, bytes)?;
        self.rebuild_renderer();
        Ok(())
    }

    /// Read, decode and attach a hand photo file.
    pub fn attach_photo_path(&mut self, hand: Hand, path: &Path) -> FingersumResult<()> {
        self.photos.attach_path(hand, path)?;
        self.rebuild_renderer();
        Ok(())
    }

    /// Remove a hand photo; photo mode shows a placeholder instead.
    pub fn clear_photo(&mut self, hand: Hand) {
        self.photos.clear(hand);
        self.rebuild_renderer();
    }

    /// Attached photos.
    pub fn photos(&self) -> &PhotoStore {
        &self.photos
    }

    fn rebuild_renderer(&mut self) {
        self.renderer = create_renderer(
            self.mode,
            self.config.canvas,
            self.palette,
            self.photos.presence(),
        );
    }

    /// The result, while the overlay is showing.
    pub fn result(&self) -> Option<ResultSummary> {
        if !self.sequencer.result_visible() {
            return None;
        }
        self.sequencer.operands().map(ResultSummary::from)
    }

    /// Hide the result overlay.
    pub fn dismiss_result(&mut self) {
        self.sequencer.hide_result();
    }

    /// Handle a click at `p`. Returns where it landed on the overlay, or `None` when no
    /// overlay is showing.
    pub fn click(&mut self, p: Point) -> Option<OverlayHit> {
        if !self.sequencer.result_visible() {
            return None;
        }
        let hit = self.overlay.hit(p);
        if hit.dismisses() {
            self.dismiss_result();
        }
        Some(hit)
    }

    /// Advance the virtual clock by `dt_ms`, resuming every wake-up that falls due.
    pub fn advance(&mut self, dt_ms: u64) -> usize {
        self.sequencer.advance_by(dt_ms)
    }

    /// Finish any run in flight.
    pub fn run_until_idle(&mut self) -> Millis {
        self.sequencer.run_until_idle()
    }

    /// The underlying sequencer.
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Hands for the current state, with the result overlay on top while it is showing.
    pub fn scene(&self) -> HandScene {
        let mut scene = self.renderer.render(&self.sequencer.snapshot());
        if let Some(ops) = self.sequencer.operands().filter(|_| self.sequencer.result_visible()) {
            self.overlay.draw(&mut scene, &self.palette, ops);
        }
        scene
    }

    /// Rasterize the current state.
    pub fn render_frame(&self, backend: &dyn RasterBackend) -> FingersumResult<FrameRGBA> {
        backend.render_scene(&self.scene(), &self.photos)
    }

    /// Trigger a run and sample it at the configured fps into `sink`, continuing `tail_ms`
    /// past the reveal.
    ///
    /// The settings are validated first and the run only starts once the sink has accepted
    /// its configuration. Frames whose visible state matches the previous frame are pushed
    /// again without being rasterized.
    #[tracing::instrument(level = "debug", skip(self, backend, sink))]
    pub fn render_timeline(
        &mut self,
        backend: &dyn RasterBackend,
        sink: &mut dyn FrameSink,
        tail_ms: u64,
    ) -> FingersumResult<RenderStats> {
        self.config.validate()?;
        let ops = self
            .validation
            .map_err(|e| FingersumError::input(format!("cannot start run: {e}")))?;
        if self.sequencer.is_running() {
            return Err(FingersumError::input(format!(
                "cannot start run: {}",
                RunBlocked::Busy
            )));
        }

        let fps = self.config.fps;
        let total_ms = self
            .sequencer
            .timings()
            .total_duration(ops)
            .saturating_add(tail_ms);
        let frames_total = fps.frames_covering(total_ms).saturating_add(1);

        sink.begin(SinkConfig {
            width: self.config.canvas.width,
            height: self.config.canvas.height,
            fps,
        })?;
        self.run()
            .map_err(|e| FingersumError::input(format!("cannot start run: {e}")))?;
        let start = self.sequencer.now();

        let mut stats = RenderStats {
            frames_total,
            ..RenderStats::default()
        };
        let mut last: Option<(u64, FrameRGBA)> = None;
        for i in 0..frames_total {
            let idx = FrameIndex(i);
            self.sequencer
                .advance_to(start.after(fps.frame_to_millis(idx).0));
            let revision = self.sequencer.revision();
            match &last {
                Some((seen, frame)) if *seen == revision => {
                    stats.frames_elided += 1;
                    sink.push_frame(idx, frame)?;
                }
                _ => {
                    let frame = self.render_frame(backend)?;
                    stats.frames_rendered += 1;
                    sink.push_frame(idx, &frame)?;
                    last = Some((revision, frame));
                }
            }
        }
        sink.end()?;

        tracing::debug!(
            frames = stats.frames_total,
            rendered = stats.frames_rendered,
            elided = stats.frames_elided,
            "timeline rendered"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
