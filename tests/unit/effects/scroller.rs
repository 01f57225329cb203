use super::*;
use crate::{
    foundation::core::Rgba8Premul,
    text::glyphs::{ATLAS_COLUMNS, CELL_WIDTH},
};

/// Atlas whose cell `k` has red channel `k`; cell 0 (blank) is transparent.
fn numbered_atlas() -> PreparedImage {
    let (w, h) = (ATLAS_COLUMNS * CELL_WIDTH, 6 * CELL_HEIGHT);
    let mut bytes = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let k = (y / CELL_HEIGHT) * ATLAS_COLUMNS + x / CELL_WIDTH;
            if k == 0 {
                bytes.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                bytes.extend_from_slice(&[k as u8, 0, 0, 255]);
            }
        }
    }
    PreparedImage::from_premul(w, h, bytes).unwrap()
}

#[test]
fn table_has_four_segments() {
    let table = DisplacementTable::new();
    assert_eq!(table.len(), TABLE_LEN);
    assert!(!table.is_empty());

    // Segment starts: swing, burst, swing, burst.
    assert_eq!(table.sample(0), 30.0);
    assert_eq!(table.sample(389), 0.0);
    assert_eq!(table.sample(457), 30.0);
    assert_eq!(table.sample(846), 0.0);

    let i = 388.0_f64;
    let expected =
        20.0 * (i * 7.0_f64.to_radians()).sin() + 30.0 * (i * 3.0_f64.to_radians()).cos();
    assert!((table.sample(388) - expected).abs() < 1e-9);
    assert!((table.sample(390) - 30.0 * 8.0_f64.to_radians().sin()).abs() < 1e-9);
}

#[test]
fn table_is_deterministic_and_indexed_cyclically() {
    let a = DisplacementTable::new();
    let b = DisplacementTable::default();
    assert_eq!(a, b);
    for i in 0..TABLE_LEN as u64 {
        assert_eq!(a.sample(i), a.sample(i + TABLE_LEN as u64));
    }
    assert!(a.as_slice().iter().all(|s| s.abs() <= 50.0));
}

#[test]
fn banner_counters_step_together() {
    let text = ScrollText::new("HELLO").unwrap();
    let mut state = BannerState::default();
    assert_eq!(state.bounce_offset(), 60.0);

    for _ in 0..10 {
        state.advance(3.0, &text);
    }
    assert_eq!(state.wave_frame, 10);
    assert!((state.bounce_phase - 12.0).abs() < 1e-9);
    assert!((state.scroll.offset_px() - 30.0).abs() < 1e-9);

    for _ in 0..5_000 {
        state.advance(3.0, &text);
        let b = state.bounce_offset();
        assert!((0.0..=60.0).contains(&b));
    }
}

#[test]
fn banner_is_shifted_twice_and_dropped_by_the_bounce() {
    let atlas = numbered_atlas();
    let text = ScrollText::new("   A    ").unwrap();
    let mut scroller = WaveScroller::new(200).unwrap();

    let blue = Rgba8Premul::opaque(0, 0, 255);
    let mut frame = Surface::new(200, 300).unwrap();
    frame.fill(blue);

    scroller.draw(&mut frame, &atlas, &text, &BannerState::default());

    // Glyph cell 3 starts at x = 186 on the text layer; band 0 is shifted by 30 twice,
    // dropped by 60 and cropped by the 128 px side margin.
    let x = 186 + 60 - 128 + 10;
    let y = 62 + 60;
    assert_eq!(frame.pixel(x, y).unwrap().r, 33);
    assert_eq!(frame.pixel(x, y - 1).unwrap(), blue);
    assert_eq!(frame.pixel(x, 0).unwrap(), blue);
    assert_eq!(frame.pixel(x, 299).unwrap(), blue);
}

#[test]
fn empty_text_cells_leave_the_frame_untouched() {
    let atlas = numbered_atlas();
    let text = ScrollText::new("  ").unwrap();
    let mut scroller = WaveScroller::new(64).unwrap();
    let mut frame = Surface::new(64, 200).unwrap();
    frame.fill(Rgba8Premul::opaque(1, 2, 3));
    let before = frame.clone();
    scroller.draw(&mut frame, &atlas, &text, &BannerState::default());
    assert_eq!(frame, before);
}
