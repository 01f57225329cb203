use crate::{
    assets::decode::PreparedImage,
    foundation::{
        core::Point,
        error::{DocError, DocResult},
        math::wrap_mod,
    },
    render::{composite::CompositeMode, surface::Surface},
    text::glyphs::{CELL_WIDTH, glyph_cell, glyph_index},
};

/// Cells drawn beyond the ones that fit the canvas width.
const EXTRA_CELLS: usize = 3;

/// Looping message rendered one byte per atlas cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollText {
    bytes: Vec<u8>,
}

impl ScrollText {
    /// Wrap `text`; it must not be empty.
    pub fn new(text: &str) -> DocResult<Self> {
        if text.is_empty() {
            return Err(DocError::validation("scroll text must not be empty"));
        }
        Ok(Self {
            bytes: text.as_bytes().to_vec(),
        })
    }

    /// Number of cells in one loop of the text.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true for a value built through [`ScrollText::new`].
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Width of one full loop of the text in pixels.
    pub fn span_px(&self) -> f64 {
        self.bytes.len() as f64 * f64::from(CELL_WIDTH)
    }

    /// Byte at cell `index`, wrapping around the end of the text.
    pub fn byte_at(&self, index: usize) -> u8 {
        self.bytes[index % self.bytes.len()]
    }
}

/// Horizontal scroll position through a [`ScrollText`], in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset_px: f64,
}

impl ScrollState {
    /// Current offset, always in `[0, text.span_px())`.
    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    /// Index of the cell under the left edge.
    pub fn char_index(&self) -> usize {
        (self.offset_px / f64::from(CELL_WIDTH)).floor() as usize
    }

    /// Move forward by `step` pixels, wrapping over one loop of `text`.
    pub fn advance(&mut self, step: f64, text: &ScrollText) {
        self.offset_px = wrap_mod(self.offset_px + step, text.span_px());
    }
}

/// Draw the visible cells of `text` at scroll position `state` along the top of `dst`.
pub fn draw_scroll_text(
    dst: &mut Surface,
    font: &PreparedImage,
    text: &ScrollText,
    state: ScrollState,
) {
    let cell = f64::from(CELL_WIDTH);
    let width = f64::from(dst.width());
    let first = state.char_index();
    let intra = state.offset_px().rem_euclid(cell);
    let cells = (width / cell).floor() as usize + EXTRA_CELLS;

    for i in 0..cells {
        let x = i as f64 * cell - intra;
        if x < -cell || x >= width + cell {
            continue;
        }
        let src = glyph_cell(glyph_index(text.byte_at(first + i)));
        dst.blit(font, src, Point::new(x, 0.0), CompositeMode::SourceOver);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/scroll.rs"]
mod tests;
