use crate::foundation::core::{Canvas, Point, Rect};
use crate::render::scene::{HandScene, Palette, Stroke, hand_transform, transform_scale};
use crate::render::{HandRenderer, RenderMode};
use crate::sequencer::{FingerSnapshot, Hand, Slot};
use kurbo::RoundedRect;

/// Finger bars in design space, indexed thumb to pinky: `(x0, top, x1, bottom)`.
const FINGERS: [(f64, f64, f64, f64); 5] = [
    (80.0, 50.0, 92.0, 80.0),
    (61.0, 18.0, 72.0, 60.0),
    (47.0, 12.0, 58.0, 60.0),
    (33.0, 18.0, 44.0, 60.0),
    (20.0, 30.0, 30.0, 62.0),
];

const PALM: (f64, f64, f64, f64) = (18.0, 55.0, 82.0, 96.0);

/// Flat, block-shaped hands: rounded rectangles for palm and fingers.
#[derive(Clone, Debug)]
pub struct SimplifiedRenderer {
    canvas: Canvas,
    palette: Palette,
}

impl SimplifiedRenderer {
    /// Renderer for `canvas`.
    pub fn new(canvas: Canvas, palette: Palette) -> Self {
        Self { canvas, palette }
    }

    fn draw_hand(&self, scene: &mut HandScene, hand: Hand, snap: &FingerSnapshot) {
        let xf = hand_transform(self.canvas, hand);
        let outline = Stroke::solid(self.palette.outline, 1.2 * transform_scale(xf));

        let (x0, y0, x1, y1) = PALM;
        scene.shape(
            &RoundedRect::new(x0, y0, x1, y1, 8.0),
            xf,
            Some(self.palette.skin),
            Some(outline),
        );

        for slot in hand.slots() {
            let (x0, top, x1, bottom) = FINGERS[slot.finger().position()];
            let fill = if snap.highlight == Some(slot) {
                self.palette.highlight
            } else {
                self.palette.skin
            };
            scene.shape(
                &RoundedRect::from_rect(Rect::new(x0, top, x1, bottom), 5.0),
                xf,
                Some(fill),
                Some(outline),
            );
        }

        for slot in hand.slots() {
            if let Some(label) = snap.slots.get(slot) {
                scene.badge(
                    &self.palette,
                    label,
                    xf * badge_anchor(slot),
                    6.0 * transform_scale(xf),
                );
            }
        }

        scene.text(
            format!("{} hand", hand.name()),
            xf * Point::new(50.0, 103.0),
            4.0 * transform_scale(xf),
            self.palette.caption,
        );
    }
}

/// Badge center in design space, just above the fingertip.
fn badge_anchor(slot: Slot) -> Point {
    let (x0, top, x1, _) = FINGERS[slot.finger().position()];
    Point::new((x0 + x1) / 2.0, top - 8.0)
}

impl HandRenderer for SimplifiedRenderer {
    fn mode(&self) -> RenderMode {
        RenderMode::Simplified
    }

    fn render(&self, snap: &FingerSnapshot) -> HandScene {
        let mut scene = HandScene::new(self.canvas, self.palette.background);
        for hand in Hand::ALL {
            self.draw_hand(&mut scene, hand, snap);
        }
        scene
    }
}
