use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8};
use crate::sequencer::{Hand, Label, LabelKind};
use kurbo::Shape;

/// Flattening tolerance used when converting kurbo shapes to paths, in scene units.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// Outline style for a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke colour.
    pub color: Rgba8,
    /// Stroke width in scene units.
    pub width: f64,
    /// Optional `(dash, gap)` pattern.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    /// Solid stroke.
    pub fn solid(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }
}

/// One drawable element, painted in list order.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneItem {
    /// Filled and/or stroked vector path.
    Path {
        /// Geometry in canvas coordinates.
        path: BezPath,
        /// Fill colour, `None` for no fill.
        fill: Option<Rgba8>,
        /// Outline, `None` for no outline.
        stroke: Option<Stroke>,
    },
    /// Text centered on `at`.
    Text {
        /// Content.
        text: String,
        /// Center point.
        at: Point,
        /// Font size in scene units.
        size: f64,
        /// Text colour.
        fill: Rgba8,
        /// Bold weight.
        bold: bool,
    },
    /// A user photo fitted into `rect`.
    Photo {
        /// Which hand's photo.
        hand: Hand,
        /// Target rectangle.
        rect: Rect,
    },
    /// Stand-in for a missing photo.
    Placeholder {
        /// Which hand's photo is missing.
        hand: Hand,
        /// Rectangle the photo would occupy.
        rect: Rect,
    },
}

/// Complete visual output of a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct HandScene {
    /// Output size.
    pub canvas: Canvas,
    /// Colour behind everything.
    pub background: Rgba8,
    /// Items in paint order.
    pub items: Vec<SceneItem>,
}

impl HandScene {
    /// Empty scene.
    pub fn new(canvas: Canvas, background: Rgba8) -> Self {
        Self {
            canvas,
            background,
            items: Vec::new(),
        }
    }

    /// Add a kurbo shape, transformed by `xf`.
    pub(crate) fn shape(
        &mut self,
        shape: &impl Shape,
        xf: Affine,
        fill: Option<Rgba8>,
        stroke: Option<Stroke>,
    ) {
        self.items.push(SceneItem::Path {
            path: xf * shape.to_path(PATH_TOLERANCE),
            fill,
            stroke,
        });
    }

    pub(crate) fn text(&mut self, text: impl Into<String>, at: Point, size: f64, fill: Rgba8) {
        self.items.push(SceneItem::Text {
            text: text.into(),
            at,
            size,
            fill,
            bold: false,
        });
    }

    /// Numbered badge for a labeled finger.
    pub(crate) fn badge(&mut self, palette: &Palette, label: Label, center: Point, radius: f64) {
        let fill = match label.kind {
            LabelKind::Final => palette.final_badge,
            LabelKind::Transient => palette.transient_badge,
        };
        self.shape(
            &kurbo::Circle::new(center, radius),
            Affine::IDENTITY,
            Some(fill),
            Some(Stroke::solid(palette.outline, (radius * 0.12).max(0.5))),
        );
        self.items.push(SceneItem::Text {
            text: label.text(),
            at: center,
            size: radius * 1.25,
            fill: palette.badge_text,
            bold: true,
        });
    }

    /// Text items in paint order, handy for assertions.
    pub fn texts(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                SceneItem::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Colours shared by all renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Canvas background.
    pub background: Rgba8,
    /// Hand fill.
    pub skin: Rgba8,
    /// Outlines and crease lines.
    pub outline: Rgba8,
    /// Fill of the active finger.
    pub highlight: Rgba8,
    /// Badge behind a final count.
    pub final_badge: Rgba8,
    /// Badge behind a provisional count.
    pub transient_badge: Rgba8,
    /// Digits inside badges.
    pub badge_text: Rgba8,
    /// Captions.
    pub caption: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0xf7, 0xf3, 0xea),
            skin: Rgba8::rgb(0xf1, 0xc2, 0x9c),
            outline: Rgba8::rgb(0x5a, 0x3e, 0x2b),
            highlight: Rgba8::rgb(0xff, 0xd1, 0x4d),
            final_badge: Rgba8::rgb(0x2f, 0x6f, 0xd6),
            transient_badge: Rgba8::rgb(0xe8, 0x7a, 0x2e),
            badge_text: Rgba8::rgb(0xff, 0xff, 0xff),
            caption: Rgba8::rgb(0x44, 0x44, 0x44),
        }
    }
}

/// Maps a hand's 100x100 design box onto its half of the canvas.
///
/// Hands are designed as the left hand with its thumb on the right (toward the centre); the
/// right hand is the mirror image.
pub(crate) fn hand_transform(canvas: Canvas, hand: Hand) -> Affine {
    let half = match hand {
        Hand::Left => canvas.fraction_rect(0.03, 0.06, 0.49, 0.94),
        Hand::Right => canvas.fraction_rect(0.51, 0.06, 0.97, 0.94),
    };
    let s = (half.width() / 100.0).min(half.height() / 100.0);
    let origin = Point::new(
        half.x0 + (half.width() - 100.0 * s) / 2.0,
        half.y0 + (half.height() - 100.0 * s) / 2.0,
    );
    let place = Affine::translate(origin.to_vec2()) * Affine::scale(s);
    match hand {
        Hand::Left => place,
        Hand::Right => place * Affine::new([-1.0, 0.0, 0.0, 1.0, 100.0, 0.0]),
    }
}

/// Uniform scale factor of a transform built by [`hand_transform`].
pub(crate) fn transform_scale(xf: Affine) -> f64 {
    let [a, b, _, _, _, _] = xf.as_coeffs();
    (a * a + b * b).sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
