use super::*;
use crate::foundation::core::Fps;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "doc3d_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn cfg(w: u32, h: u32) -> SinkConfig {
    SinkConfig {
        width: w,
        height: h,
        fps: Fps::new(60, 1).unwrap(),
        audio: None,
    }
}

fn half_red(w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: [128u8, 0, 0, 128].repeat((w * h) as usize),
        premultiplied: true,
    }
}

#[test]
fn write_png_flattens_over_background() {
    let tmp = temp_dir("write_png");
    let path = tmp.join("nested/one.png");
    write_png(&path, &half_red(2, 2), [0, 0, 255, 255]).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(1, 1).0, [128, 0, 127, 255]);

    std::fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn sequence_sink_numbers_files_by_frame_index() {
    let tmp = temp_dir("png_sequence");
    let mut sink = PngSequenceSink::new(&tmp).with_prefix("doc_");
    sink.begin(cfg(4, 2)).unwrap();
    sink.push_frame(FrameIndex(7), &half_red(4, 2)).unwrap();
    sink.push_frame(FrameIndex(8), &half_red(4, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(
        sink.written(),
        &[tmp.join("doc_000007.png"), tmp.join("doc_000008.png")]
    );
    for path in sink.written() {
        assert!(path.is_file());
    }

    std::fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn sequence_sink_rejects_bad_order_and_sizes() {
    let tmp = temp_dir("png_sequence_errors");
    let mut sink = PngSequenceSink::new(&tmp);
    assert!(sink.push_frame(FrameIndex(0), &half_red(2, 2)).is_err());

    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(FrameIndex(5), &half_red(2, 2)).unwrap();
    assert!(sink.push_frame(FrameIndex(5), &half_red(2, 2)).is_err());
    assert!(sink.push_frame(FrameIndex(6), &half_red(4, 2)).is_err());
    sink.end().unwrap();
    assert!(sink.end().is_err());

    std::fs::remove_dir_all(&tmp).unwrap();
}
