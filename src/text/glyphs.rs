use crate::foundation::core::Rect;

/// Width of one atlas cell in pixels.
pub const CELL_WIDTH: u32 = 62;
/// Height of one atlas cell in pixels.
pub const CELL_HEIGHT: u32 = 50;
/// Cells per atlas row.
pub const ATLAS_COLUMNS: u32 = 10;

/// Atlas cell index for a character code. Unmapped codes fall back to the blank cell 0.
pub fn glyph_index(code: u8) -> u32 {
    match code {
        b'!' => 1,
        b'\'' => 7,
        b'(' => 8,
        b')' => 9,
        b',' => 12,
        b'-' => 13,
        b'.' => 14,
        b'0'..=b'9' => 16 + u32::from(code - b'0'),
        b':' => 26,
        b';' => 27,
        b'?' => 31,
        b'A'..=b'Z' => 33 + u32::from(code - b'A'),
        b'a'..=b'z' => 33 + u32::from(code - b'a'),
        _ => 0,
    }
}

/// Source rectangle of atlas cell `index`.
pub fn glyph_cell(index: u32) -> Rect {
    let x = f64::from((index % ATLAS_COLUMNS) * CELL_WIDTH);
    let y = f64::from((index / ATLAS_COLUMNS) * CELL_HEIGHT);
    Rect::new(x, y, x + f64::from(CELL_WIDTH), y + f64::from(CELL_HEIGHT))
}

#[cfg(test)]
#[path = "../../tests/unit/text/glyphs.rs"]
mod tests;
