//! Distorted banner: a text scroller pushed through a horizontal wave and a vertical bounce.

use crate::{
    assets::decode::PreparedImage,
    foundation::{
        core::{Point, Rect},
        error::DocResult,
    },
    render::{composite::CompositeMode, surface::Surface},
    text::{
        glyphs::CELL_HEIGHT,
        scroll::{ScrollState, ScrollText, draw_scroll_text},
    },
};

/// Number of samples in the displacement table.
pub const TABLE_LEN: usize = 1035;
/// Extra width of the working layers over the viewport, split evenly on both sides.
pub const SIDE_MARGIN: u32 = 128;
/// Height of the bounce layer.
pub const BOUNCE_HEIGHT: u32 = 120;
/// Frame row where the banner is drawn.
pub const BANNER_Y: f64 = 62.0;

const BAND_HEIGHT: u32 = 2;
const BAND_COUNT: u32 = CELL_HEIGHT / BAND_HEIGHT;
const BOUNCE_STEP: f64 = 1.2;

/// Precomputed horizontal displacement per band, in pixels.
///
/// Four segments: a slow two-frequency swing, a short sine burst, the swing again and a
/// longer sine burst.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplacementTable {
    samples: Vec<f64>,
}

impl Default for DisplacementTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplacementTable {
    /// Build the table.
    pub fn new() -> Self {
        let swing = |i: usize| {
            let i = i as f64;
            20.0 * (i * 7.0_f64.to_radians()).sin() + 30.0 * (i * 3.0_f64.to_radians()).cos()
        };
        let burst = |i: usize| 30.0 * (i as f64 * 8.0_f64.to_radians()).sin();

        let mut samples = Vec::with_capacity(TABLE_LEN);
        samples.extend((0..389).map(swing));
        samples.extend((0..68).map(burst));
        samples.extend((0..389).map(swing));
        samples.extend((0..189).map(burst));
        Self { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, wrapping modulo the table length.
    pub fn sample(&self, index: u64) -> f64 {
        self.samples[(index % self.samples.len() as u64) as usize]
    }

    /// All samples in order.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

/// Per-frame banner counters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BannerState {
    /// Text scroll position.
    pub scroll: ScrollState,
    /// Frames since the banner started; selects the table window.
    pub wave_frame: u64,
    /// Phase of the vertical bounce.
    pub bounce_phase: f64,
}

impl BannerState {
    /// Vertical bounce offset in `[0, 60]`.
    pub fn bounce_offset(&self) -> f64 {
        30.0 + 30.0 * (self.bounce_phase / 20.0).cos()
    }

    /// Step every counter past a drawn frame.
    pub fn advance(&mut self, scroll_step: f64, text: &ScrollText) {
        self.scroll.advance(scroll_step, text);
        self.bounce_phase += BOUNCE_STEP;
        self.wave_frame += 1;
    }
}

/// Working layers and displacement table for the banner.
#[derive(Debug)]
pub struct WaveScroller {
    table: DisplacementTable,
    viewport_width: u32,
    text_layer: Surface,
    wave_layer: Surface,
    bounce_layer: Surface,
}

impl WaveScroller {
    /// Allocate layers for a `viewport_width`-wide frame.
    pub fn new(viewport_width: u32) -> DocResult<Self> {
        let wide = viewport_width + 2 * SIDE_MARGIN;
        Ok(Self {
            table: DisplacementTable::new(),
            viewport_width,
            text_layer: Surface::new(wide, CELL_HEIGHT)?,
            wave_layer: Surface::new(wide, CELL_HEIGHT)?,
            bounce_layer: Surface::new(wide, BOUNCE_HEIGHT)?,
        })
    }

    /// The displacement table in use.
    pub fn table(&self) -> &DisplacementTable {
        &self.table
    }

    /// Draw the banner for `state` onto `dst`.
    #[tracing::instrument(level = "trace", skip_all, fields(wave_frame = state.wave_frame))]
    pub fn draw(
        &mut self,
        dst: &mut Surface,
        font: &PreparedImage,
        text: &ScrollText,
        state: &BannerState,
    ) {
        self.text_layer.clear();
        self.wave_layer.clear();
        self.bounce_layer.clear();

        draw_scroll_text(&mut self.text_layer, font, text, state.scroll);

        let wide = f64::from(self.text_layer.width());
        let bounce = state.bounce_offset();
        for j in 0..BAND_COUNT {
            let top = f64::from(j * BAND_HEIGHT);
            let band = Rect::new(0.0, top, wide, top + f64::from(BAND_HEIGHT));
            let shift = self.table.sample(state.wave_frame + u64::from(j));

            self.wave_layer.blit(
                &self.text_layer,
                band,
                Point::new(shift, top),
                CompositeMode::SourceOver,
            );
            // The bounce pass shifts each band horizontally a second time.
            self.bounce_layer.blit(
                &self.wave_layer,
                band,
                Point::new(shift, top + bounce),
                CompositeMode::SourceOver,
            );
        }

        let margin = f64::from(SIDE_MARGIN);
        let visible = Rect::new(
            margin,
            0.0,
            margin + f64::from(self.viewport_width),
            f64::from(BOUNCE_HEIGHT),
        );
        dst.blit(
            &self.bounce_layer,
            visible,
            Point::new(0.0, BANNER_Y),
            CompositeMode::SourceOver,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scroller.rs"]
mod tests;
