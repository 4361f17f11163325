use std::sync::Arc;

use resvg::tiny_skia;

use crate::assets::{PhotoStore, PreparedImage};
use crate::foundation::core::Rect;
use crate::foundation::error::{FingersumError, FingersumResult};
use crate::render::backend::{FrameRGBA, RasterBackend};
use crate::render::scene::{HandScene, SceneItem};
use crate::render::svg::{SvgOptions, scene_to_svg};

/// CPU raster backend.
///
/// Photos are drawn straight into the pixmap first; everything else goes through an SVG
/// document rasterized by `resvg` on top.
#[derive(Clone)]
pub struct CpuBackend {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBackend {
    /// Backend using the system fonts for labels.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self::with_fontdb(Arc::new(db))
    }

    /// Backend sharing an existing font database.
    pub fn with_fontdb(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self { fontdb }
    }

    /// Rasterize `scene` into a premultiplied RGBA8 frame.
    pub fn render(&self, scene: &HandScene, photos: &PhotoStore) -> FingersumResult<FrameRGBA> {
        let (w, h) = (scene.canvas.width, scene.canvas.height);
        let mut pixmap = tiny_skia::Pixmap::new(w, h)
            .ok_or_else(|| FingersumError::render(format!("failed to allocate {w}x{h} pixmap")))?;
        let bg = scene.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

        for item in &scene.items {
            if let SceneItem::Photo { hand, rect } = item {
                match photos.get(*hand) {
                    Some(img) => draw_photo(&mut pixmap, img, *rect)?,
                    None => tracing::warn!(hand = hand.name(), "photo item without attached photo"),
                }
            }
        }

        let svg = scene_to_svg(scene, SvgOptions { background: false });
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| FingersumError::render(format!("parse scene svg: {e}")))?;
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        Ok(FrameRGBA {
            width: w,
            height: h,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

impl RasterBackend for CpuBackend {
    fn render_scene(&self, scene: &HandScene, photos: &PhotoStore) -> FingersumResult<FrameRGBA> {
        self.render(scene, photos)
    }
}

/// Draw `img` scaled to fit inside `rect`, centered, aspect preserved.
fn draw_photo(
    pixmap: &mut tiny_skia::Pixmap,
    img: &PreparedImage,
    rect: Rect,
) -> FingersumResult<()> {
    let size = tiny_skia::IntSize::from_wh(img.width, img.height)
        .ok_or_else(|| FingersumError::render("photo has no pixels"))?;
    let src = tiny_skia::Pixmap::from_vec(img.rgba8_premul.as_ref().clone(), size)
        .ok_or_else(|| FingersumError::render("photo buffer does not match its size"))?;

    let (iw, ih) = (f64::from(img.width), f64::from(img.height));
    let s = (rect.width() / iw).min(rect.height() / ih);
    let tx = rect.x0 + (rect.width() - iw * s) / 2.0;
    let ty = rect.y0 + (rect.height() - ih * s) / 2.0;

    let paint = tiny_skia::PixmapPaint {
        quality: tiny_skia::FilterQuality::Bilinear,
        ..tiny_skia::PixmapPaint::default()
    };
    pixmap.draw_pixmap(
        0,
        0,
        src.as_ref(),
        &paint,
        tiny_skia::Transform::from_row(s as f32, 0.0, 0.0, s as f32, tx as f32, ty as f32),
        None,
    );
    Ok(())
}
