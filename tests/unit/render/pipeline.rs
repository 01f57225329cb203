use std::io::Cursor;

use super::*;
use crate::{
    assets::store::{
        BACKDROP, BALL, BANNER_FONT, DemoAssets, INTRO_FONT, MOUNTAINS, MemoryAssetSource, SHADOWS,
    },
    config::DemoConfig,
    encode::sink::InMemorySink,
    foundation::{clock::ClockMode, core::Canvas},
};

fn png(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn engine() -> Engine {
    engine_with(DemoConfig {
        viewport: Canvas {
            width: 320,
            height: 240,
        },
        skip_intro: true,
        ..DemoConfig::default()
    })
}

fn engine_with(cfg: DemoConfig) -> Engine {
    let mut src = MemoryAssetSource::new();
    src.insert(BACKDROP, png(10, 240, [0, 0, 90, 255])).unwrap();
    src.insert(MOUNTAINS, png(320, 100, [0, 0, 0, 0])).unwrap();
    src.insert(INTRO_FONT, png(620, 300, [250, 250, 250, 255]))
        .unwrap();
    src.insert(BANNER_FONT, png(620, 300, [0, 250, 0, 255]))
        .unwrap();
    src.insert(BALL, png(64, 64, [255, 0, 0, 255])).unwrap();
    for name in SHADOWS {
        src.insert(name, png(64, 16, [0, 0, 0, 128])).unwrap();
    }
    Engine::new(cfg, DemoAssets::load(&src).unwrap()).unwrap()
}

#[test]
fn render_frame_replays_earlier_ticks() {
    let frame = render_frame(&mut engine(), FrameIndex(3)).unwrap();

    let mut manual = engine();
    for i in 0..4 {
        manual.update(f64::from(i) / 60.0);
    }
    let mut surface = Surface::for_canvas(manual.viewport()).unwrap();
    manual.draw(&mut surface).unwrap();

    assert_eq!(frame, surface.to_frame());
    assert!(frame.premultiplied);
}

#[test]
fn render_range_pushes_ordered_frames() {
    let mut e = engine();
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    let stats = render_range(&mut e, range, &mut sink, None).unwrap();

    assert_eq!(
        stats,
        RenderStats {
            frames_total: 3,
            frames_rendered: 3,
            frames_fast_forwarded: 2,
        }
    );
    assert!(sink.is_ended());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (320, 240));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![2, 3, 4]);
    assert_eq!(e.state().ticks, 5);

    let last = render_frame(&mut engine(), FrameIndex(4)).unwrap();
    assert_eq!(sink.frames()[2].1, last);
}

#[test]
fn empty_ranges_and_rewinds_are_rejected() {
    let mut e = engine();
    let mut sink = InMemorySink::new();
    let empty = FrameRange::new(FrameIndex(4), FrameIndex(4)).unwrap();
    assert!(render_range(&mut e, empty, &mut sink, None).is_err());
    assert!(sink.config().is_none());

    render_frame(&mut e, FrameIndex(5)).unwrap();
    let err = render_frame(&mut e, FrameIndex(2)).unwrap_err();
    assert!(matches!(err, DocError::Validation(_)));
}

#[test]
fn wall_clock_keeps_running_between_calls() {
    let mut e = engine_with(DemoConfig {
        viewport: Canvas {
            width: 320,
            height: 240,
        },
        skip_intro: true,
        clock: ClockMode::WallClock,
        ..DemoConfig::default()
    });
    render_frame(&mut e, FrameIndex(0)).unwrap();
    let first = e.state().elapsed_secs;
    std::thread::sleep(std::time::Duration::from_millis(400));
    render_frame(&mut e, FrameIndex(1)).unwrap();
    let second = e.state().elapsed_secs;
    assert!(second >= first + 0.4, "first={first} second={second}");

    // Replayed ticks read the same clock, so they never start over near zero.
    std::thread::sleep(std::time::Duration::from_millis(100));
    render_frame(&mut e, FrameIndex(5)).unwrap();
    assert!(e.state().elapsed_secs >= second + 0.1);
}

#[test]
fn fixed_step_time_follows_the_tick_count_across_calls() {
    let mut e = engine();
    render_frame(&mut e, FrameIndex(2)).unwrap();
    assert!((e.state().elapsed_secs - 2.0 / 60.0).abs() < 1e-12);
    render_frame(&mut e, FrameIndex(30)).unwrap();
    assert!((e.state().elapsed_secs - 0.5).abs() < 1e-12);
}
