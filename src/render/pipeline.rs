use std::path::PathBuf;

use crate::{
    encode::{
        ffmpeg::{FfmpegSink, FfmpegSinkOpts},
        sink::{AudioInputConfig, FrameSink, SinkConfig},
    },
    engine::demo::Engine,
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{DocError, DocResult},
    },
    render::{frame::FrameRGBA, surface::Surface},
};

/// Aggregated rendering counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames drawn and handed to the sink.
    pub frames_rendered: u64,
    /// Ticks updated without drawing to reach the start of the range.
    pub frames_fast_forwarded: u64,
}

/// Update then draw a single frame.
///
/// Frame `n` is the state after `n + 1` updates; earlier ticks are replayed without drawing.
/// Time comes from the engine's own clock. Returns **premultiplied** RGBA8 pixels.
pub fn render_frame(engine: &mut Engine, frame: FrameIndex) -> DocResult<FrameRGBA> {
    fast_forward(engine, frame)?;
    engine.step();

    let mut surface = Surface::for_canvas(engine.viewport())?;
    engine.draw(&mut surface)?;
    Ok(surface.to_frame())
}

/// Render `range` (start inclusive, end exclusive) into `sink`, one update and one draw per frame.
#[tracing::instrument(skip_all, fields(start = range.start.0, end = range.end.0))]
pub fn render_range(
    engine: &mut Engine,
    range: FrameRange,
    sink: &mut dyn FrameSink,
    audio: Option<AudioInputConfig>,
) -> DocResult<RenderStats> {
    if range.is_empty() {
        return Err(DocError::validation("render range must be non-empty"));
    }
    let fps = engine.config().fps;
    let mut stats = RenderStats {
        frames_fast_forwarded: fast_forward(engine, range.start)?,
        ..RenderStats::default()
    };

    let viewport = engine.viewport();
    sink.begin(SinkConfig {
        width: viewport.width,
        height: viewport.height,
        fps,
        audio,
    })?;

    let mut surface = Surface::for_canvas(viewport)?;
    for f in range.start.0..range.end.0 {
        engine.step();
        engine.draw(&mut surface)?;
        sink.push_frame(FrameIndex(f), &surface.to_frame())?;
        stats.frames_total += 1;
        stats.frames_rendered += 1;
    }

    sink.end()?;
    tracing::debug!(?stats, "range rendered");
    Ok(stats)
}

/// Render `range` to an MP4 at `out_path` through the system `ffmpeg`.
pub fn render_to_mp4(
    engine: &mut Engine,
    out_path: impl Into<PathBuf>,
    range: FrameRange,
    audio: Option<AudioInputConfig>,
) -> DocResult<RenderStats> {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(out_path));
    render_range(engine, range, &mut sink, audio)
}

// Update without drawing until the next update produces frame `target`.
fn fast_forward(engine: &mut Engine, target: FrameIndex) -> DocResult<u64> {
    let done = engine.state().ticks;
    if done > target.0 {
        return Err(DocError::validation(format!(
            "engine already advanced {done} ticks, cannot render frame {}",
            target.0
        )));
    }
    for _ in done..target.0 {
        engine.step();
    }
    Ok(target.0 - done)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
