use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    assets::decode::{PreparedImage, decode_image},
    foundation::error::{DocError, DocResult},
};

/// Sky gradient strip, stretched across the frame.
pub const BACKDROP: &str = "backdrop.png";
/// Mountain silhouette layer.
pub const MOUNTAINS: &str = "mountains.png";
/// Glyph atlas for the intro scroller.
pub const INTRO_FONT: &str = "kh6.png";
/// Glyph atlas for the distorted banner.
pub const BANNER_FONT: &str = "font_out.png";
/// Orbiting body sprite.
pub const BALL: &str = "ball.png";
/// Shadow sprites, darkest first.
pub const SHADOWS: [&str; 4] = ["shadow1.png", "shadow2.png", "shadow3.png", "shadow4.png"];
/// Optional soundtrack.
pub const MUSIC: &str = "music.mp3";

/// Named byte blobs the demo loads its assets from.
pub trait AssetSource {
    /// Bytes of `name`, or `None` when the source does not have it.
    fn read(&self, name: &str) -> DocResult<Option<Vec<u8>>>;

    /// Filesystem path of `name`, for consumers that need a file (the encoder's audio input).
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Assets read from a directory.
#[derive(Clone, Debug)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    /// Serve files below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the assets are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> DocResult<PathBuf> {
        Ok(self.root.join(Path::new(&normalize_rel_path(name)?)))
    }
}

impl AssetSource for DirAssetSource {
    fn read(&self, name: &str) -> DocResult<Option<Vec<u8>>> {
        let path = self.path_for(name)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DocError::from(
                anyhow::Error::new(e)
                    .context(format!("read asset bytes from '{}'", path.display())),
            )),
        }
    }

    fn locate(&self, name: &str) -> Option<PathBuf> {
        let path = self.path_for(name).ok()?;
        path.is_file().then_some(path)
    }
}

/// Assets held in memory, keyed by normalized name.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetSource {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace `name`.
    pub fn insert(&mut self, name: &str, bytes: Vec<u8>) -> DocResult<()> {
        self.files.insert(normalize_rel_path(name)?, bytes);
        Ok(())
    }

    /// Builder-style [`MemoryAssetSource::insert`].
    pub fn with(mut self, name: &str, bytes: Vec<u8>) -> DocResult<Self> {
        self.insert(name, bytes)?;
        Ok(self)
    }
}

impl AssetSource for MemoryAssetSource {
    fn read(&self, name: &str) -> DocResult<Option<Vec<u8>>> {
        Ok(self.files.get(&normalize_rel_path(name)?).cloned())
    }

    fn locate(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

/// Every image the demo draws, decoded up front.
#[derive(Clone, Debug)]
pub struct DemoAssets {
    /// Sky gradient strip.
    pub backdrop: PreparedImage,
    /// Mountain layer.
    pub mountains: PreparedImage,
    /// Intro glyph atlas.
    pub intro_font: PreparedImage,
    /// Banner glyph atlas.
    pub banner_font: PreparedImage,
    /// Body sprite.
    pub ball: PreparedImage,
    /// Shadow sprites, darkest first.
    pub shadows: [PreparedImage; 4],
    /// Soundtrack file, when the source has one on disk.
    pub music: Option<PathBuf>,
}

impl DemoAssets {
    /// Decode every required image from `source`.
    ///
    /// Missing or undecodable images are fatal. A missing soundtrack only disables audio.
    #[tracing::instrument(skip_all)]
    pub fn load(source: &dyn AssetSource) -> DocResult<Self> {
        let music = source.locate(MUSIC);
        match &music {
            Some(path) => tracing::info!(path = %path.display(), "soundtrack found"),
            None => tracing::warn!(name = MUSIC, "soundtrack not found, audio disabled"),
        }

        Ok(Self {
            backdrop: load_image(source, BACKDROP)?,
            mountains: load_image(source, MOUNTAINS)?,
            intro_font: load_image(source, INTRO_FONT)?,
            banner_font: load_image(source, BANNER_FONT)?,
            ball: load_image(source, BALL)?,
            shadows: [
                load_image(source, SHADOWS[0])?,
                load_image(source, SHADOWS[1])?,
                load_image(source, SHADOWS[2])?,
                load_image(source, SHADOWS[3])?,
            ],
            music,
        })
    }
}

fn load_image(source: &dyn AssetSource, name: &str) -> DocResult<PreparedImage> {
    let bytes = source
        .read(name)?
        .ok_or_else(|| DocError::asset(format!("required asset '{name}' is missing")))?;
    let image = decode_image(&bytes)
        .with_context(|| format!("decode asset '{name}'"))
        .map_err(|e| DocError::asset(format!("{e:#}")))?;
    tracing::debug!(name, width = image.width(), height = image.height(), "asset decoded");
    Ok(image)
}

pub(crate) fn normalize_rel_path(source: &str) -> DocResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(DocError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(DocError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(DocError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(DocError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
