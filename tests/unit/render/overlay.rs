use super::*;

fn overlay() -> ResultOverlay {
    ResultOverlay::new(Canvas::new(1000, 500).unwrap())
}

#[test]
fn close_button_sits_inside_the_panel() {
    let o = overlay();
    let panel = o.panel_rect();
    let close = o.close_rect();
    assert!(panel.contains(close.origin()));
    assert!(close.x1 <= panel.x1 && close.y1 <= panel.y1);
}

#[test]
fn hits_are_classified_by_region() {
    let o = overlay();
    assert_eq!(o.hit(o.close_rect().center()), OverlayHit::Close);
    assert_eq!(o.hit(o.panel_rect().center()), OverlayHit::Panel);
    assert_eq!(o.hit(Point::new(5.0, 5.0)), OverlayHit::Outside);

    assert!(OverlayHit::Close.dismisses());
    assert!(OverlayHit::Outside.dismisses());
    assert!(!OverlayHit::Panel.dismisses());
}

#[test]
fn draw_shows_the_equation() {
    let o = overlay();
    let palette = Palette::default();
    let mut scene = HandScene::new(Canvas::new(1000, 500).unwrap(), palette.background);
    o.draw(&mut scene, &palette, Operands::new(3, 4).unwrap());
    assert_eq!(scene.texts(), vec!["3 + 4 = 7"]);
}
