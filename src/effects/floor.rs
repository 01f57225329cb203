//! Scrolling perspective checkerboard.
//!
//! The board is built on a small offscreen layer in two halves: slanted bands that fan out
//! toward the viewer (horizontal scroll) and full-width rows whose spacing follows a perspective
//! divide (depth scroll). XOR-ing the rows onto the bands yields the checker pattern. The layer
//! is then stretched onto the frame.

use crate::{
    foundation::{
        core::{Affine, Point, Rect, Rgba8Premul},
        error::DocResult,
        math::wrap_mod,
    },
    render::{composite::CompositeMode, surface::Surface},
};

/// Width of the offscreen floor layer.
pub const FLOOR_WIDTH: u32 = 1280;
/// Height of the offscreen floor layer.
pub const FLOOR_HEIGHT: u32 = 80;
/// Tile colour.
pub const FLOOR_COLOR: Rgba8Premul = Rgba8Premul {
    r: 96,
    g: 96,
    b: 96,
    a: 255,
};

const FOV: f64 = 250.0;
const Y_SPEED: f64 = 315.0;
const X_WRAP: f64 = 32.0;
const Y_WRAP: f64 = 64.0;
const BANDS: std::ops::Range<i32> = -5..50;
const MASK_ROWS: std::ops::Range<i32> = -2..8;

/// Speed oscillators driving the floor scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorMotion {
    /// Phase of the depth-speed oscillator.
    pub vbl: f64,
    /// Phase of the sideways-speed oscillator.
    pub vbl2: f64,
    /// Signed overall speed factor in `[-1, 1]`.
    pub speed: f64,
    /// Sideways speed.
    pub x_speed: f64,
}

impl Default for FloorMotion {
    fn default() -> Self {
        Self {
            vbl: 0.0,
            vbl2: 0.0,
            speed: 1.0,
            x_speed: 0.0,
        }
    }
}

impl FloorMotion {
    /// Sample both oscillators, then advance their phases.
    pub fn step(&mut self) {
        self.speed = -(self.vbl / 40.0).cos();
        self.vbl += 0.16;
        self.x_speed = 128.0 * (self.vbl2 / 40.0).cos();
        self.vbl2 += 0.8;
    }
}

/// Scroll offsets of the two floor layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloorScroll {
    /// Sideways offset in `[0, 32)`.
    pub x_move: f64,
    /// Depth offset in `[0, 64)`.
    pub y_move: f64,
}

impl FloorScroll {
    /// Move both offsets by one tick of `motion`.
    pub fn advance(&mut self, motion: &FloorMotion) {
        self.x_move = wrap_mod(self.x_move + motion.x_speed * motion.speed * 0.005, X_WRAP);
        self.y_move = wrap_mod(self.y_move + Y_SPEED * motion.speed * 0.016, Y_WRAP);
    }
}

/// Slanted band quads for sideways offset `x_move`, corners in drawing order.
pub fn band_quads(x_move: f64) -> impl Iterator<Item = [Point; 4]> {
    let bottom = f64::from(FLOOR_HEIGHT);
    BANDS.map(move |i| {
        let i = f64::from(i);
        [
            Point::new(-8.0 + 32.0 * i + x_move, 0.0),
            Point::new(8.0 + 32.0 * i + x_move, 0.0),
            Point::new(-752.0 + 192.0 * i + 6.0 * x_move, bottom),
            Point::new(-848.0 + 192.0 * i + 6.0 * x_move, bottom),
        ]
    })
}

/// Vertical `[start, end)` spans of the perspective rows for depth offset `y_move`, clipped to
/// the layer height. Empty and fully hidden rows are dropped.
pub fn mask_strips(y_move: f64) -> Vec<(f64, f64)> {
    let height = f64::from(FLOOR_HEIGHT);
    let row_y = |depth: f64| -20.0 + FOV / (FOV + depth - y_move) * 50.0;

    MASK_ROWS
        .filter_map(|i| {
            let near = 64.0 * f64::from(i);
            let (a, b) = (row_y(near), row_y(near + 32.0));
            let (y1, y2) = if a > b { (b, a) } else { (a, b) };
            (y2 > y1 && y1 < height && y2 > 0.0).then(|| (y1.max(0.0), y2.min(height)))
        })
        .collect()
}

/// Transform placing the floor layer on the frame.
pub fn floor_placement() -> Affine {
    Affine::translate((0.0, 260.0)) * Affine::scale_non_uniform(0.6, 2.6)
}

/// Offscreen layers for the checkerboard.
#[derive(Debug)]
pub struct PerspectiveFloor {
    bands: Surface,
    mask: Surface,
}

impl PerspectiveFloor {
    /// Allocate both layers.
    pub fn new() -> DocResult<Self> {
        Ok(Self {
            bands: Surface::new(FLOOR_WIDTH, FLOOR_HEIGHT)?,
            mask: Surface::new(FLOOR_WIDTH, FLOOR_HEIGHT)?,
        })
    }

    /// Rebuild the checkerboard layer for `scroll`.
    pub fn render(&mut self, scroll: &FloorScroll) -> DocResult<&Surface> {
        draw_bands(&mut self.bands, scroll.x_move)?;

        self.mask.clear();
        for (start, end) in mask_strips(scroll.y_move) {
            self.mask.fill_rect(
                Rect::new(0.0, start, f64::from(FLOOR_WIDTH), end),
                FLOOR_COLOR,
                CompositeMode::SourceOver,
            );
        }

        let full = Rect::new(
            0.0,
            0.0,
            f64::from(self.mask.width()),
            f64::from(self.mask.height()),
        );
        self.bands
            .blit(&self.mask, full, Point::ORIGIN, CompositeMode::Xor);
        Ok(&self.bands)
    }

    /// Render for `scroll` and paint the stretched layer onto `dst`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn draw(&mut self, scroll: &FloorScroll, dst: &mut Surface) -> DocResult<()> {
        let layer = self.render(scroll)?.to_image()?;
        dst.paint(CompositeMode::SourceOver, |p| {
            p.draw_image(&layer, floor_placement());
            Ok(())
        })
    }
}

fn draw_bands(layer: &mut Surface, x_move: f64) -> DocResult<()> {
    layer.clear();
    layer.paint(CompositeMode::SourceOver, |p| {
        for quad in band_quads(x_move) {
            p.fill_polygon(&quad, FLOOR_COLOR);
        }
        Ok(())
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/floor.rs"]
mod tests;
