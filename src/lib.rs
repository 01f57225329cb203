//! doc3d renders the "3D-Doc" demoscene screen: four sprites orbiting over a scrolling
//! perspective floor, under a sine-distorted bouncing banner, preceded by a plain intro scroller.
//!
//! The engine is frame driven and deterministic:
//!
//! - Load [`DemoAssets`] from an [`AssetSource`] and build an [`Engine`] from a [`DemoConfig`]
//! - Call [`Engine::step`] (or [`Engine::update`] with an explicit time) then [`Engine::draw`]
//!   once per tick
//! - Or let [`render_range`] drive the loop and stream frames into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod compose;
mod config;
mod effects;
mod encode;
mod engine;
mod foundation;
mod render;
mod scene;
mod text;

pub use crate::foundation::clock::{Clock, ClockMode, FixedStepClock, MonotonicClock};
pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{DocError, DocResult};

pub use crate::scene::projector::{
    ProjectedSprite, SPRITE_SCALE_FACTOR, VERTICAL_CENTER_BIAS, project,
};
pub use crate::scene::vec3::Point3;

pub use crate::animation::motion::{
    Lerp, MotionParams, PHASE_COUNT, PHASE_DURATION_SECS, PhaseState, WARM_UP_SECS, blend,
    blend_alpha, blended_motion, motion_profile, raw_phase_index, resolve_phase,
};
pub use crate::animation::orbit::{
    AnimatorState, BODY_COUNT, FOCAL_LENGTH, OrbitFrame, SHADOW_GROUND_Y, animate,
};

pub use crate::compose::depth::{
    BODY_SIZE, DrawCall, SHADOW_SIZE, SHADOW_VARIANTS, SpriteImage, depth_order, emit_draw_calls,
    shadow_bucket, shadow_lift,
};

pub use crate::effects::floor::{
    FLOOR_COLOR, FLOOR_HEIGHT, FLOOR_WIDTH, FloorMotion, FloorScroll, PerspectiveFloor,
    band_quads, floor_placement, mask_strips,
};
pub use crate::effects::scroller::{
    BANNER_Y, BOUNCE_HEIGHT, BannerState, DisplacementTable, SIDE_MARGIN, TABLE_LEN, WaveScroller,
};

pub use crate::text::glyphs::{ATLAS_COLUMNS, CELL_HEIGHT, CELL_WIDTH, glyph_cell, glyph_index};
pub use crate::text::scroll::{ScrollState, ScrollText, draw_scroll_text};

pub use crate::assets::decode::{PreparedImage, decode_image};
pub use crate::assets::store::{
    AssetSource, BACKDROP, BALL, BANNER_FONT, DemoAssets, DirAssetSource, INTRO_FONT,
    MOUNTAINS, MUSIC, MemoryAssetSource, SHADOWS,
};

pub use crate::render::composite::{CompositeMode, PremulRgba8, composite_in_place, over, xor};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::pipeline::{RenderStats, render_frame, render_range, render_to_mp4};
pub use crate::render::surface::{Painter, PixelSource, Surface};

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{AudioInputConfig, FrameSink, InMemorySink, SinkConfig};

pub use crate::config::{DEFAULT_BANNER_TEXT, DEFAULT_INTRO_TEXT, DemoConfig};
pub use crate::engine::demo::{Engine, EngineState, Stage};
