use super::*;
use crate::text::glyphs::{ATLAS_COLUMNS, CELL_HEIGHT};

/// Atlas whose cell `k` is filled with red channel `k`.
fn numbered_atlas() -> PreparedImage {
    let (w, h) = (ATLAS_COLUMNS * CELL_WIDTH, 6 * CELL_HEIGHT);
    let mut bytes = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let k = (y / CELL_HEIGHT) * ATLAS_COLUMNS + x / CELL_WIDTH;
            bytes.extend_from_slice(&[k as u8, 0, 0, 255]);
        }
    }
    PreparedImage::from_premul(w, h, bytes).unwrap()
}

#[test]
fn empty_text_is_rejected() {
    assert!(ScrollText::new("").is_err());
}

#[test]
fn advance_wraps_over_one_loop() {
    let text = ScrollText::new("ABCD").unwrap();
    let mut state = ScrollState::default();
    for _ in 0..1_000 {
        state.advance(3.0, &text);
        assert!((0.0..text.span_px()).contains(&state.offset_px()));
    }
    // 3000 px modulo 248 px.
    assert!((state.offset_px() - 24.0).abs() < 1e-9);

    state.advance(-30.0, &text);
    assert!((state.offset_px() - 242.0).abs() < 1e-9);
    assert_eq!(state.char_index(), 3);
}

#[test]
fn byte_at_wraps() {
    let text = ScrollText::new("AB").unwrap();
    assert_eq!(text.byte_at(0), b'A');
    assert_eq!(text.byte_at(3), b'B');
    assert_eq!(text.len(), 2);
    assert!(!text.is_empty());
}

#[test]
fn draws_cells_from_the_scroll_position() {
    let atlas = numbered_atlas();
    let text = ScrollText::new("AB").unwrap();
    let mut dst = Surface::new(124, 50).unwrap();

    draw_scroll_text(&mut dst, &atlas, &text, ScrollState::default());
    assert_eq!(dst.pixel(10, 10).unwrap().r, 33);
    assert_eq!(dst.pixel(70, 10).unwrap().r, 34);

    let mut state = ScrollState::default();
    state.advance(31.0, &text);
    dst.clear();
    draw_scroll_text(&mut dst, &atlas, &text, state);
    assert_eq!(dst.pixel(10, 10).unwrap().r, 33);
    assert_eq!(dst.pixel(40, 10).unwrap().r, 34);
    assert_eq!(dst.pixel(100, 10).unwrap().r, 33);
}

#[test]
fn unmapped_characters_draw_the_blank_cell() {
    let atlas = numbered_atlas();
    let text = ScrollText::new("\\").unwrap();
    let mut dst = Surface::new(62, 50).unwrap();
    draw_scroll_text(&mut dst, &atlas, &text, ScrollState::default());
    let px = dst.pixel(30, 20).unwrap();
    assert_eq!((px.r, px.a), (0, 255));
}
