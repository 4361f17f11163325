use crate::foundation::core::Rgba8;
use crate::render::scene::{HandScene, SceneItem, Stroke};
use std::fmt::Write as _;

const PLACEHOLDER_FILL: Rgba8 = Rgba8::rgb(0xe4, 0xe0, 0xd8);
const PLACEHOLDER_INK: Rgba8 = Rgba8::rgb(0x88, 0x84, 0x7c);

/// Options for [`scene_to_svg`].
#[derive(Clone, Copy, Debug)]
pub struct SvgOptions {
    /// Paint the scene background as a full-canvas rect. The raster backend turns this off
    /// because it fills the pixmap and composites photos first.
    pub background: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { background: true }
    }
}

/// Serialize a scene as a standalone SVG document.
///
/// Photo items become empty, tagged rects: pixels are only composited by the raster backend.
pub fn scene_to_svg(scene: &HandScene, opts: SvgOptions) -> String {
    let (w, h) = (scene.canvas.width, scene.canvas.height);
    let mut out = String::with_capacity(256 + scene.items.len() * 160);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    out.push('\n');

    if opts.background {
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{w}" height="{h}"{}/>"#,
            fill_attrs(Some(scene.background))
        );
    }

    for item in &scene.items {
        match item {
            SceneItem::Path { path, fill, stroke } => {
                let _ = writeln!(
                    out,
                    r#"  <path d="{}"{}{}/>"#,
                    path.to_svg(),
                    fill_attrs(*fill),
                    stroke_attrs(stroke.as_ref())
                );
            }
            SceneItem::Text {
                text,
                at,
                size,
                fill,
                bold,
            } => write_text(&mut out, text, at.x, at.y, *size, *fill, *bold),
            SceneItem::Photo { hand, rect } => {
                let _ = writeln!(
                    out,
                    r#"  <rect data-photo="{}" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none"/>"#,
                    hand.name(),
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height()
                );
            }
            SceneItem::Placeholder { hand, rect } => {
                let r = rect.width().min(rect.height()) * 0.04;
                let dash = Stroke {
                    color: PLACEHOLDER_INK,
                    width: 2.0,
                    dash: Some((8.0, 6.0)),
                };
                let _ = writeln!(
                    out,
                    r#"  <rect data-placeholder="{}" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{r:.2}"{}{}/>"#,
                    hand.name(),
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                    fill_attrs(Some(PLACEHOLDER_FILL)),
                    stroke_attrs(Some(&dash))
                );
                let c = rect.center();
                write_text(
                    &mut out,
                    &format!("no {} hand photo", hand.name()),
                    c.x,
                    c.y,
                    (rect.height() * 0.05).max(8.0),
                    PLACEHOLDER_INK,
                    false,
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_text(out: &mut String, text: &str, x: f64, y: f64, size: f64, fill: Rgba8, bold: bool) {
    let weight = if bold { r#" font-weight="bold""# } else { "" };
    let _ = writeln!(
        out,
        r#"  <text x="{x:.2}" y="{y:.2}" font-family="sans-serif" font-size="{size:.2}" text-anchor="middle" dominant-baseline="central"{weight}{}>{}</text>"#,
        fill_attrs(Some(fill)),
        escape_xml(text)
    );
}

fn fill_attrs(fill: Option<Rgba8>) -> String {
    match fill {
        None => r#" fill="none""#.to_owned(),
        Some(c) if c.a == 255 => format!(r#" fill="{}""#, c.to_hex_rgb()),
        Some(c) => format!(
            r#" fill="{}" fill-opacity="{:.3}""#,
            c.to_hex_rgb(),
            c.opacity()
        ),
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    let Some(s) = stroke else {
        return String::new();
    };
    let mut out = format!(
        r#" stroke="{}" stroke-width="{:.2}" stroke-linejoin="round" stroke-linecap="round""#,
        s.color.to_hex_rgb(),
        s.width
    );
    if s.color.a != 255 {
        let _ = write!(out, r#" stroke-opacity="{:.3}""#, s.color.opacity());
    }
    if let Some((on, off)) = s.dash {
        let _ = write!(out, r#" stroke-dasharray="{on:.2} {off:.2}""#);
    }
    out
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
