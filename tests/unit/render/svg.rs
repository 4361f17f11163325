use super::*;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::render::scene::Palette;
use crate::sequencer::{Hand, Label};

fn sample_scene() -> HandScene {
    let palette = Palette::default();
    let mut scene = HandScene::new(Canvas::new(200, 100).unwrap(), palette.background);
    scene.badge(&palette, Label::final_count(3), Point::new(50.0, 50.0), 10.0);
    scene.text("a < b & c", Point::new(100.0, 90.0), 8.0, palette.caption);
    scene.items.push(SceneItem::Placeholder {
        hand: Hand::Right,
        rect: Rect::new(110.0, 10.0, 190.0, 80.0),
    });
    scene.items.push(SceneItem::Photo {
        hand: Hand::Left,
        rect: Rect::new(10.0, 10.0, 90.0, 80.0),
    });
    scene
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape_xml("<a & 'b'>"), "&lt;a &amp; &apos;b&apos;&gt;");
    let svg = scene_to_svg(&sample_scene(), SvgOptions::default());
    assert!(svg.contains("a &lt; b &amp; c"));
}

#[test]
fn output_parses_back_with_usvg() {
    let svg = scene_to_svg(&sample_scene(), SvgOptions::default());
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 200.0);
    assert_eq!(tree.size().height(), 100.0);
}

#[test]
fn background_rect_is_optional() {
    let scene = sample_scene();
    let with = scene_to_svg(&scene, SvgOptions { background: true });
    let without = scene_to_svg(&scene, SvgOptions { background: false });
    let bg = format!(r#"fill="{}""#, scene.background.to_hex_rgb());
    assert!(with.contains(&bg));
    assert!(!without.contains(&bg));
}

#[test]
fn photo_items_are_tagged_but_not_painted() {
    let svg = scene_to_svg(&sample_scene(), SvgOptions::default());
    assert!(svg.contains(r#"data-photo="left""#));
    assert!(svg.contains(r#"data-placeholder="right""#));
    assert!(svg.contains("no right hand photo"));
}

#[test]
fn translucent_colours_carry_opacity() {
    let mut scene = HandScene::new(Canvas::new(10, 10).unwrap(), Rgba8::rgb(0, 0, 0));
    scene.shape(
        &Rect::new(0.0, 0.0, 5.0, 5.0),
        crate::foundation::core::Affine::IDENTITY,
        Some(Rgba8::rgb(255, 0, 0).with_alpha(128)),
        Some(Stroke {
            color: Rgba8::rgb(0, 0, 255).with_alpha(51),
            width: 1.0,
            dash: Some((2.0, 1.0)),
        }),
    );
    let svg = scene_to_svg(&scene, SvgOptions::default());
    assert!(svg.contains(r#"fill-opacity="0.502""#));
    assert!(svg.contains(r#"stroke-opacity="0.200""#));
    assert!(svg.contains(r#"stroke-dasharray="2.00 1.00""#));
}
