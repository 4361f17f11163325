use super::*;
use crate::foundation::core::Fps;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fingersum-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::default(),
    }
}

#[test]
fn writes_numbered_files_that_decode_back() {
    let dir = temp_dir("png-seq");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg(4, 2)).unwrap();
    sink.push_frame(FrameIndex(0), &solid(4, 2, [10, 20, 30, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &solid(4, 2, [64, 0, 0, 128]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(
        sink.written(),
        &[dir.join("frame_00000.png"), dir.join("frame_00001.png")]
    );
    let first = image::open(&sink.written()[0]).unwrap().to_rgba8();
    assert_eq!(first.dimensions(), (4, 2));
    assert_eq!(first.get_pixel(0, 0).0, [10, 20, 30, 255]);

    // Premultiplied input is stored straight.
    let second = image::open(&sink.written()[1]).unwrap().to_rgba8();
    assert_eq!(second.get_pixel(3, 1).0, [128, 0, 0, 128]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rejects_frames_of_the_wrong_size() {
    let dir = temp_dir("png-size");
    let mut sink = PngSequenceSink::new(&dir).with_prefix("x");
    sink.begin(cfg(4, 2)).unwrap();
    let err = sink
        .push_frame(FrameIndex(0), &solid(2, 2, [0, 0, 0, 255]))
        .unwrap_err();
    assert!(err.to_string().contains("sink expects 4x2"), "{err}");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = PngSequenceSink::new(temp_dir("png-early"));
    assert!(
        sink.push_frame(FrameIndex(0), &solid(1, 1, [0, 0, 0, 0]))
            .is_err()
    );
}
