use std::io::Cursor;

use super::*;

fn png(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([200, 150, 120, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn attach_and_clear_track_presence_per_hand() {
    let mut store = PhotoStore::new();
    assert_eq!(store.presence(), PhotoPresence::default());

    store.attach(Hand::Right, &png(4, 3)).unwrap();
    assert_eq!(
        store.presence(),
        PhotoPresence {
            left: false,
            right: true
        }
    );
    assert_eq!(store.get(Hand::Right).map(|p| (p.width, p.height)), Some((4, 3)));
    assert!(store.get(Hand::Left).is_none());

    store.clear(Hand::Right);
    assert!(!store.presence().right);
}

#[test]
fn failed_attach_keeps_previous_photo() {
    let mut store = PhotoStore::new();
    store.attach(Hand::Left, &png(2, 2)).unwrap();
    assert!(store.attach(Hand::Left, b"nope").is_err());
    assert_eq!(store.get(Hand::Left).map(|p| p.width), Some(2));
}

#[test]
fn missing_file_is_an_asset_error() {
    let mut store = PhotoStore::new();
    let err = store
        .attach_path(Hand::Left, Path::new("/definitely/not/here.png"))
        .unwrap_err();
    assert!(matches!(err, FingersumError::Asset(_)));
}
