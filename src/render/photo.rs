use crate::foundation::core::{Canvas, Point, Rect};
use crate::render::scene::{HandScene, Palette, SceneItem, Stroke};
use crate::render::{HandRenderer, RenderMode};
use crate::sequencer::{FingerSnapshot, Hand, Slot};
use kurbo::{Affine, Circle};

/// Which hand photos are attached. The photo renderer only needs presence; pixels are
/// composited later by the raster backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhotoPresence {
    /// Left hand photo attached.
    pub left: bool,
    /// Right hand photo attached.
    pub right: bool,
}

impl PhotoPresence {
    /// Presence for `hand`.
    pub fn has(self, hand: Hand) -> bool {
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }
}

/// Fingertip anchors of a left-hand photo as fractions of its frame, thumb to pinky.
/// The right hand uses the horizontal mirror.
const LEFT_ANCHORS: [(f64, f64); 5] = [
    (0.84, 0.55),
    (0.66, 0.16),
    (0.50, 0.10),
    (0.35, 0.15),
    (0.20, 0.30),
];

/// Photo frame of each hand as fractions of the canvas.
fn photo_frame(canvas: Canvas, hand: Hand) -> Rect {
    match hand {
        Hand::Left => canvas.fraction_rect(0.04, 0.08, 0.48, 0.92),
        Hand::Right => canvas.fraction_rect(0.52, 0.08, 0.96, 0.92),
    }
}

/// Fingertip marker position for `slot` on the canvas.
pub(crate) fn anchor(canvas: Canvas, slot: Slot) -> Point {
    let frame = photo_frame(canvas, slot.hand());
    let (fx, fy) = LEFT_ANCHORS[slot.finger().position()];
    let fx = match slot.hand() {
        Hand::Left => fx,
        Hand::Right => 1.0 - fx,
    };
    Point::new(
        frame.x0 + fx * frame.width(),
        frame.y0 + fy * frame.height(),
    )
}

/// User photos with count markers pinned at fixed fingertip anchors.
#[derive(Clone, Debug)]
pub struct PhotoRenderer {
    canvas: Canvas,
    palette: Palette,
    photos: PhotoPresence,
}

impl PhotoRenderer {
    /// Renderer for `canvas` with the given photos attached.
    pub fn new(canvas: Canvas, palette: Palette, photos: PhotoPresence) -> Self {
        Self {
            canvas,
            palette,
            photos,
        }
    }

    fn marker_radius(&self) -> f64 {
        let frame = photo_frame(self.canvas, Hand::Left);
        frame.width().min(frame.height()) * 0.045
    }
}

impl HandRenderer for PhotoRenderer {
    fn mode(&self) -> RenderMode {
        RenderMode::Photo
    }

    fn render(&self, snap: &FingerSnapshot) -> HandScene {
        let mut scene = HandScene::new(self.canvas, self.palette.background);

        // Photos and placeholders go first; the raster backend composites photos beneath
        // everything else.
        for hand in Hand::ALL {
            let rect = photo_frame(self.canvas, hand);
            if self.photos.has(hand) {
                scene.items.push(SceneItem::Photo { hand, rect });
            } else {
                scene.items.push(SceneItem::Placeholder { hand, rect });
            }
        }

        let r = self.marker_radius();
        for slot in Slot::all() {
            let at = anchor(self.canvas, slot);
            let highlighted = snap.highlight == Some(slot);
            if highlighted {
                scene.shape(
                    &Circle::new(at, r * 1.6),
                    Affine::IDENTITY,
                    Some(self.palette.highlight.with_alpha(0xb0)),
                    Some(Stroke::solid(self.palette.outline, r * 0.15)),
                );
            }
            match snap.slots.get(slot) {
                Some(label) => scene.badge(&self.palette, label, at, r),
                None => scene.shape(
                    &Circle::new(at, r * 0.35),
                    Affine::IDENTITY,
                    None,
                    Some(Stroke::solid(self.palette.outline.with_alpha(0xa0), r * 0.12)),
                ),
            }
        }
        scene
    }
}
