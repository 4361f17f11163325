use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgba8};
use crate::operands::Operands;
use crate::render::scene::{HandScene, Palette, SceneItem, Stroke};
use kurbo::{Line, RoundedRect};

/// Where a click landed relative to the result overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayHit {
    /// The close button.
    Close,
    /// Inside the panel, away from the close button.
    Panel,
    /// On the dimmed backdrop.
    Outside,
}

impl OverlayHit {
    /// Whether this click dismisses the overlay.
    pub fn dismisses(self) -> bool {
        !matches!(self, Self::Panel)
    }
}

const BACKDROP: Rgba8 = Rgba8::rgb(0x10, 0x10, 0x18).with_alpha(0x8c);
const PANEL: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);

/// Layout of the result panel for one canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultOverlay {
    canvas: Canvas,
}

impl ResultOverlay {
    /// Overlay for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas }
    }

    /// Centered panel rectangle.
    pub fn panel_rect(&self) -> Rect {
        self.canvas.fraction_rect(0.3, 0.32, 0.7, 0.68)
    }

    /// Close button in the panel's top-right corner.
    pub fn close_rect(&self) -> Rect {
        let panel = self.panel_rect();
        let side = panel.height() * 0.18;
        let pad = side * 0.35;
        Rect::new(
            panel.x1 - pad - side,
            panel.y0 + pad,
            panel.x1 - pad,
            panel.y0 + pad + side,
        )
    }

    /// Classify a click at `p`.
    pub fn hit(&self, p: Point) -> OverlayHit {
        if self.close_rect().contains(p) {
            OverlayHit::Close
        } else if self.panel_rect().contains(p) {
            OverlayHit::Panel
        } else {
            OverlayHit::Outside
        }
    }

    /// Append the backdrop, panel, equation and close button to `scene`.
    pub fn draw(&self, scene: &mut HandScene, palette: &Palette, ops: Operands) {
        scene.shape(&self.canvas.rect(), Affine::IDENTITY, Some(BACKDROP), None);

        let panel = self.panel_rect();
        let radius = panel.height() * 0.08;
        scene.shape(
            &RoundedRect::from_rect(panel, radius),
            Affine::IDENTITY,
            Some(PANEL),
            Some(Stroke::solid(palette.outline, 2.0)),
        );

        scene.items.push(SceneItem::Text {
            text: format!("{ops} = {}", ops.sum()),
            at: panel.center(),
            size: panel.height() * 0.22,
            fill: palette.outline,
            bold: true,
        });

        let close = self.close_rect();
        let inset = close.width() * 0.25;
        let cross = Stroke::solid(palette.outline, (close.width() * 0.12).max(1.0));
        let (a, b) = (close.inset(-inset), close);
        scene.shape(
            &Line::new((a.x0, a.y0), (a.x1, a.y1)),
            Affine::IDENTITY,
            None,
            Some(cross),
        );
        scene.shape(
            &Line::new((a.x1, a.y0), (a.x0, a.y1)),
            Affine::IDENTITY,
            None,
            Some(cross),
        );
        scene.shape(
            &RoundedRect::from_rect(b, b.width() * 0.2),
            Affine::IDENTITY,
            None,
            Some(Stroke::solid(palette.outline.with_alpha(0x60), 1.0)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
