//! Encoding sinks.
//!
//! Sinks consume rendered frames in timeline order and are driven by `render_range`.

/// `ffmpeg`-based MP4 output.
pub(crate) mod ffmpeg;
/// PNG stills and sequences.
pub(crate) mod png;
/// Frame sink trait and the in-memory sink.
pub(crate) mod sink;
