use crate::foundation::error::{DocError, DocResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// 0-based tick number; frame `n` is drawn after `n + 1` engine updates.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames `[start, end)` handed to a sink by `render_range`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First rendered frame.
    pub start: FrameIndex,
    /// One past the last rendered frame.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Range from `start` up to `end`; an inverted range is a validation error.
    pub fn new(start: FrameIndex, end: FrameIndex) -> DocResult<Self> {
        if start > end {
            return Err(DocError::validation(format!(
                "frame range {}..{} runs backwards",
                start.0, end.0
            )));
        }
        Ok(Self { start, end })
    }

    /// `true` when there is nothing to render.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }
}

/// Tick rate as `num / den` frames per second. The demo runs at 60/1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames.
    pub num: u32,
    /// Per this many seconds.
    pub den: u32,
}

impl Fps {
    /// Validated tick rate; both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> DocResult<Self> {
        if num == 0 || den == 0 {
            return Err(DocError::validation(format!(
                "frame rate {num}/{den} must have non-zero parts"
            )));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as `f64`.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to a whole frame count, rounding down.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Pixel dimensions of a viewport or surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Solid fill colour in premultiplied RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully opaque colour; premultiplying leaves it unchanged.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Bytes in surface order (`r, g, b, a`).
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
