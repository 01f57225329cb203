use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::new(60, 1).unwrap(),
        audio: None,
    }
}

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![v, v, v, 255],
        premultiplied: true,
    }
}

#[test]
fn flatten_premul_alpha_0_returns_bg() {
    let src = vec![0u8, 0, 0, 0];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_premul_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &[0u8; 4], [0, 0, 0, 255]).is_err());
}

#[test]
fn in_memory_sink_collects_frames_between_begin_and_end() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame(1)).is_err());

    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame(1)).unwrap();
    sink.push_frame(FrameIndex(4), &frame(2)).unwrap();
    sink.end().unwrap();

    assert!(sink.is_ended());
    assert_eq!(sink.config().unwrap().width, 1);
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![3, 4]);
    assert_eq!(sink.frames()[1].1.data[0], 2);

    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_ended());
}
