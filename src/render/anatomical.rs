use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8, Vec2};
use crate::render::scene::{
    HandScene, Palette, SceneItem, Stroke, hand_transform, transform_scale,
};
use crate::render::{HandRenderer, RenderMode};
use crate::sequencer::{FingerSnapshot, Hand, Slot};
use kurbo::{Ellipse, Line, RoundedRect};

const NAIL: Rgba8 = Rgba8::rgb(0xfb, 0xe3, 0xd3);

/// Finger geometry in design space (left hand, thumb toward +x).
#[derive(Clone, Copy, Debug)]
struct Digit {
    /// Knuckle center.
    base: Point,
    /// Lean from vertical, degrees; positive leans toward the thumb side.
    lean_deg: f64,
    length: f64,
    width: f64,
    /// Crease positions as fractions of `length` from the base.
    creases: &'static [f64],
}

/// Thumb to pinky.
const DIGITS: [Digit; 5] = [
    Digit {
        base: Point::new(72.0, 72.0),
        lean_deg: 52.0,
        length: 30.0,
        width: 13.0,
        creases: &[0.45],
    },
    Digit {
        base: Point::new(63.0, 54.0),
        lean_deg: 8.0,
        length: 38.0,
        width: 11.0,
        creases: &[0.38, 0.68],
    },
    Digit {
        base: Point::new(50.5, 52.0),
        lean_deg: 0.0,
        length: 42.0,
        width: 11.5,
        creases: &[0.38, 0.68],
    },
    Digit {
        base: Point::new(38.5, 54.0),
        lean_deg: -6.0,
        length: 38.0,
        width: 11.0,
        creases: &[0.38, 0.68],
    },
    Digit {
        base: Point::new(27.5, 60.0),
        lean_deg: -14.0,
        length: 30.0,
        width: 9.5,
        creases: &[0.4, 0.7],
    },
];

impl Digit {
    /// Maps finger-local space (base at origin, tip toward -y) into design space.
    fn placement(&self) -> Affine {
        Affine::translate(self.base.to_vec2()) * Affine::rotate(self.lean_deg.to_radians())
    }

    fn outline(&self) -> RoundedRect {
        let hw = self.width / 2.0;
        // Extends slightly below the knuckle so the finger tucks under the palm edge.
        RoundedRect::new(-hw, -self.length, hw, hw, hw)
    }

    fn tip_badge(&self) -> Point {
        self.placement() * Point::new(0.0, -self.length - 7.5)
    }
}

fn palm_path() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((22.0, 62.0));
    p.curve_to((26.0, 52.0), (60.0, 48.0), (69.0, 55.0));
    p.curve_to((74.0, 60.0), (78.0, 66.0), (77.0, 76.0));
    p.curve_to((76.0, 88.0), (70.0, 97.0), (58.0, 99.0));
    p.line_to((38.0, 99.0));
    p.curve_to((27.0, 97.0), (21.0, 88.0), (20.0, 76.0));
    p.close_path();
    p
}

/// Rounded fingers with knuckle creases and nails, splayed around a curved palm.
#[derive(Clone, Debug)]
pub struct AnatomicalRenderer {
    canvas: Canvas,
    palette: Palette,
}

impl AnatomicalRenderer {
    /// Renderer for `canvas`.
    pub fn new(canvas: Canvas, palette: Palette) -> Self {
        Self { canvas, palette }
    }

    fn draw_hand(&self, scene: &mut HandScene, hand: Hand, snap: &FingerSnapshot) {
        let xf = hand_transform(self.canvas, hand);
        let scale = transform_scale(xf);
        let outline = Stroke::solid(self.palette.outline, 1.1 * scale);
        let crease = Stroke::solid(self.palette.outline.with_alpha(0x90), 0.6 * scale);

        // Fingers first so the palm covers their roots.
        for slot in hand.slots() {
            self.draw_digit(scene, xf, slot, snap.highlight == Some(slot), outline, crease);
        }

        scene.items.push(SceneItem::Path {
            path: xf * palm_path(),
            fill: Some(self.palette.skin),
            stroke: Some(outline),
        });
        // Thenar crease.
        let mut thenar = BezPath::new();
        thenar.move_to((66.0, 62.0));
        thenar.quad_to((56.0, 76.0), (60.0, 94.0));
        scene.items.push(SceneItem::Path {
            path: xf * thenar,
            fill: None,
            stroke: Some(crease),
        });

        for slot in hand.slots() {
            if let Some(label) = snap.slots.get(slot) {
                let digit = &DIGITS[slot.finger().position()];
                scene.badge(&self.palette, label, xf * digit.tip_badge(), 6.0 * scale);
            }
        }
    }

    fn draw_digit(
        &self,
        scene: &mut HandScene,
        xf: Affine,
        slot: Slot,
        highlighted: bool,
        outline: Stroke,
        crease: Stroke,
    ) {
        let digit = &DIGITS[slot.finger().position()];
        let local = xf * digit.placement();
        let fill = if highlighted {
            self.palette.highlight
        } else {
            self.palette.skin
        };
        let stroke = if highlighted {
            Stroke {
                width: outline.width * 1.8,
                ..outline
            }
        } else {
            outline
        };

        scene.shape(&digit.outline(), local, Some(fill), Some(stroke));

        let hw = digit.width / 2.0;
        for &k in digit.creases {
            let y = -digit.length * k;
            scene.shape(
                &Line::new((-hw * 0.65, y), (hw * 0.65, y)),
                local,
                None,
                Some(crease),
            );
        }

        let nail = Ellipse::new(
            Point::new(0.0, -digit.length + digit.width * 0.55),
            Vec2::new(hw * 0.6, hw * 0.8),
            0.0,
        );
        scene.shape(&nail, local, Some(NAIL), Some(crease));
    }
}

impl HandRenderer for AnatomicalRenderer {
    fn mode(&self) -> RenderMode {
        RenderMode::Anatomical
    }

    fn render(&self, snap: &FingerSnapshot) -> HandScene {
        let mut scene = HandScene::new(self.canvas, self.palette.background);
        for hand in Hand::ALL {
            self.draw_hand(&mut scene, hand, snap);
        }
        scene
    }
}
