use super::*;
use crate::render::scene::SceneItem;
use crate::sequencer::{Hand, Label, Slot};

fn snapshot() -> FingerSnapshot {
    let mut snap = FingerSnapshot::default();
    for (i, label) in [Label::final_count(1), Label::final_count(2), Label::transient(1)]
        .into_iter()
        .enumerate()
    {
        snap.slots.set(Slot::new(i).unwrap(), label);
    }
    snap.highlight = Slot::new(2);
    snap
}

fn renderer(mode: RenderMode, photos: PhotoPresence) -> Box<dyn HandRenderer> {
    create_renderer(mode, Canvas::default(), Palette::default(), photos)
}

#[test]
fn every_renderer_is_idempotent() {
    let snap = snapshot();
    for mode in RenderMode::ALL {
        let r = renderer(mode, PhotoPresence::default());
        assert_eq!(r.mode(), mode);
        assert_eq!(r.render(&snap), r.render(&snap), "{mode}");
    }
}

#[test]
fn every_renderer_shows_the_labels_it_is_given() {
    let snap = snapshot();
    for mode in RenderMode::ALL {
        let scene = renderer(mode, PhotoPresence::default()).render(&snap);
        let texts = scene.texts();
        assert_eq!(texts.iter().filter(|t| **t == "1").count(), 2, "{mode}");
        assert_eq!(texts.iter().filter(|t| **t == "2").count(), 1, "{mode}");
    }
}

#[test]
fn highlight_changes_the_scene() {
    let snap = snapshot();
    let plain = FingerSnapshot {
        highlight: None,
        ..snap
    };
    for mode in RenderMode::ALL {
        let r = renderer(mode, PhotoPresence::default());
        assert_ne!(r.render(&snap), r.render(&plain), "{mode}");
    }
}

#[test]
fn empty_snapshot_has_no_badges() {
    let scene = renderer(RenderMode::Anatomical, PhotoPresence::default())
        .render(&FingerSnapshot::default());
    assert!(scene.texts().is_empty());

    let scene = renderer(RenderMode::Simplified, PhotoPresence::default())
        .render(&FingerSnapshot::default());
    assert_eq!(scene.texts(), vec!["left hand", "right hand"]);
}

#[test]
fn photo_mode_uses_placeholders_for_missing_photos() {
    let snap = snapshot();
    let scene = renderer(
        RenderMode::Photo,
        PhotoPresence {
            left: true,
            right: false,
        },
    )
    .render(&snap);

    assert!(matches!(
        scene.items[0],
        SceneItem::Photo {
            hand: Hand::Left,
            ..
        }
    ));
    assert!(matches!(
        scene.items[1],
        SceneItem::Placeholder {
            hand: Hand::Right,
            ..
        }
    ));
    assert!(
        scene.items[2..]
            .iter()
            .all(|i| matches!(i, SceneItem::Path { .. } | SceneItem::Text { .. }))
    );
}

#[test]
fn photo_anchors_mirror_between_hands() {
    let canvas = Canvas::default();
    let w = f64::from(canvas.width);
    for finger in 0..5 {
        let l = photo::anchor(canvas, Slot::new(finger).unwrap());
        let r = photo::anchor(canvas, Slot::new(finger + 5).unwrap());
        assert!((l.x + r.x - w).abs() < 1e-9, "finger {finger}");
        assert!((l.y - r.y).abs() < 1e-9);
    }
}

#[test]
fn render_mode_names_round_trip() {
    for mode in RenderMode::ALL {
        assert_eq!(mode.to_string().parse::<RenderMode>(), Ok(mode));
    }
    assert!("sketch".parse::<RenderMode>().is_err());
    assert_eq!(
        serde_json::to_string(&RenderMode::Anatomical).unwrap(),
        "\"anatomical\""
    );
}
