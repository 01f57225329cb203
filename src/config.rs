use std::{fs::File, io::BufReader, path::Path};

use crate::{
    effects::scroller::SIDE_MARGIN,
    foundation::{
        clock::ClockMode,
        core::{Canvas, Fps},
        error::{DocError, DocResult},
    },
};

/// Message of the intro scroller. The `\` marks where the main screen takes over.
pub const DEFAULT_INTRO_TEXT: &str = "               BILIZIR FROM DMA HAVE DONE IT AGAIN: A NEW RUST CONVERSION, THIS TIME THIS IS THE 3D-DOC FROM TCB    \\          ";

/// Message of the distorted banner.
pub const DEFAULT_BANNER_TEXT: &str = "                          BILIZIR IS PROUD TO PRESENT THE CONVERSION OF THE 3D-DOC DEMO!    THIS SCREEN WAS ORIGINALLY RELEASED IN TCB'S CUDDLY DEMOS ON ATARI ST A LONG TIME AGO...  HERE IT'S THE RUST VERSION OF THE 3D-DOC WELL IT'S A FREE ADAPTATION :)   GREETINGS TO ALL MEMBERS OF DMA AND THE UNION... LET'S WRAP!   ";

/// Demo settings, read from JSON. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Output frame size.
    pub viewport: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Intro scroller message.
    pub intro_text: String,
    /// Banner message.
    pub banner_text: String,
    /// Start directly on the main screen.
    pub skip_intro: bool,
    /// Intro scroll speed in pixels per frame.
    pub intro_speed: f64,
    /// Banner scroll speed in pixels per frame.
    pub banner_speed: f64,
    /// Time source for the orbit animation.
    pub clock: ClockMode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport: Canvas {
                width: 768,
                height: 540,
            },
            fps: Fps { num: 60, den: 1 },
            intro_text: DEFAULT_INTRO_TEXT.to_string(),
            banner_text: DEFAULT_BANNER_TEXT.to_string(),
            skip_intro: false,
            intro_speed: 5.0,
            banner_speed: 3.0,
            clock: ClockMode::FixedStep,
        }
    }
}

impl DemoConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> DocResult<Self> {
        serde_json::from_str(s).map_err(|e| DocError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DocError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| DocError::validation(format!("parse config JSON '{}': {e}", path.display())))
    }

    /// Check ranges the engine relies on.
    pub fn validate(&self) -> DocResult<()> {
        let Canvas { width, height } = self.viewport;
        if width == 0 || height == 0 {
            return Err(DocError::validation("viewport dimensions must be non-zero"));
        }
        let max = u32::from(u16::MAX);
        if width.saturating_add(2 * SIDE_MARGIN) > max || height > max {
            return Err(DocError::validation("viewport is too large"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if self.intro_text.is_empty() || self.banner_text.is_empty() {
            return Err(DocError::validation("scroll texts must not be empty"));
        }
        if !self.intro_speed.is_finite() || !self.banner_speed.is_finite() {
            return Err(DocError::validation("scroll speeds must be finite"));
        }
        if self.intro_speed <= 0.0 {
            return Err(DocError::validation(format!(
                "intro speed must be positive, got {}",
                self.intro_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
