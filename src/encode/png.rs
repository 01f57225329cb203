use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    encode::{
        ffmpeg::ensure_parent_dir,
        sink::{FrameSink, SinkConfig, flatten_premul_over_bg_to_opaque_rgba8},
    },
    foundation::{
        core::FrameIndex,
        error::{DocError, DocResult},
    },
    render::frame::FrameRGBA,
};

/// Flatten `frame` over `bg_rgba` and write it as an opaque PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA, bg_rgba: [u8; 4]) -> DocResult<()> {
    let mut rgba = vec![0u8; frame.data.len()];
    if frame.premultiplied {
        flatten_premul_over_bg_to_opaque_rgba8(&mut rgba, &frame.data, bg_rgba)?;
    } else {
        rgba.copy_from_slice(&frame.data);
    }
    ensure_parent_dir(path)?;

    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .ok_or_else(|| DocError::encode("frame.data size mismatch with width*height*4"))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Sink writing each frame to `<out_dir>/<prefix><index>.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    out_dir: PathBuf,
    prefix: String,
    bg_rgba: [u8; 4],
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Write into `out_dir` with the default `frame_` prefix.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            prefix: "frame_".to_string(),
            bg_rgba: [0, 0, 0, 255],
            cfg: None,
            last_idx: None,
            written: Vec::new(),
        }
    }

    /// Use `prefix` for file names.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Path the frame with index `idx` is written to.
    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.out_dir.join(format!("{}{:06}.png", self.prefix, idx.0))
    }

    /// Files written since the last `begin`, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> DocResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(DocError::validation(
                "png sink width/height must be non-zero",
            ));
        }
        std::fs::create_dir_all(&self.out_dir).with_context(|| {
            format!(
                "failed to create output directory '{}'",
                self.out_dir.display()
            )
        })?;
        if cfg.audio.is_some() {
            tracing::debug!("png sequence output ignores the soundtrack");
        }
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> DocResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| DocError::encode("png sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(DocError::encode(
                "png sink received out-of-order frame index",
            ));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(DocError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        self.last_idx = Some(idx);

        let path = self.path_for(idx);
        write_png(&path, frame, self.bg_rgba)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> DocResult<()> {
        if self.cfg.take().is_none() {
            return Err(DocError::encode("png sink not started"));
        }
        tracing::info!(
            frames = self.written.len(),
            dir = %self.out_dir.display(),
            "png sequence written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
