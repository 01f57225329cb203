use crate::{
    animation::orbit::{AnimatorState, OrbitFrame, animate},
    assets::store::DemoAssets,
    compose::depth::{SpriteImage, emit_draw_calls},
    config::DemoConfig,
    effects::{
        floor::{FloorMotion, FloorScroll, PerspectiveFloor},
        scroller::{BANNER_Y, BannerState, WaveScroller},
    },
    foundation::{
        clock::Clock,
        core::{Affine, Canvas, FrameIndex, Point, Rect, Rgba8Premul},
        error::{DocError, DocResult},
    },
    render::{composite::CompositeMode, surface::Surface},
    text::{
        glyphs::CELL_HEIGHT,
        scroll::{ScrollState, ScrollText, draw_scroll_text},
    },
};

const INTRO_TRIGGER: u8 = b'\\';
// Part of each intro step taken between the trigger check and the draw.
const INTRO_LEAD_PX: f64 = 2.0;

/// Which screen the demo is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Plain text scroller on black.
    #[default]
    Intro,
    /// Floor, banner and orbiting bodies. Never left once entered.
    Main,
}

/// Every per-frame counter of the demo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineState {
    /// Current screen.
    pub stage: Stage,
    /// Number of `update` calls so far.
    pub ticks: u64,
    /// Number of main-stage ticks so far.
    pub main_ticks: u64,
    /// Elapsed seconds passed to the latest `update`.
    pub elapsed_secs: f64,
    /// Intro scroll position.
    pub intro: ScrollState,
    /// Floor speed oscillators.
    pub floor_motion: FloorMotion,
    /// Floor scroll offsets.
    pub floor_scroll: FloorScroll,
    /// Banner counters.
    pub banner: BannerState,
    /// Orbit spin and phase latch.
    pub animator: AnimatorState,
    /// Bodies and shadows for the current frame.
    pub orbit: OrbitFrame,
}

/// The demo: state plus the scratch layers needed to draw it.
#[derive(Debug)]
pub struct Engine {
    config: DemoConfig,
    assets: DemoAssets,
    intro_text: ScrollText,
    banner_text: ScrollText,
    state: EngineState,
    clock: Box<dyn Clock>,
    intro_layer: Surface,
    floor: PerspectiveFloor,
    scroller: WaveScroller,
}

impl Engine {
    /// Build an engine for `config`, drawing with `assets`.
    pub fn new(config: DemoConfig, assets: DemoAssets) -> DocResult<Self> {
        config.validate()?;
        let viewport = config.viewport;

        let state = EngineState {
            stage: if config.skip_intro {
                Stage::Main
            } else {
                Stage::Intro
            },
            ..EngineState::default()
        };
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            stage = ?state.stage,
            "engine created"
        );

        Ok(Self {
            intro_text: ScrollText::new(&config.intro_text)?,
            banner_text: ScrollText::new(&config.banner_text)?,
            intro_layer: Surface::new(viewport.width, CELL_HEIGHT)?,
            floor: PerspectiveFloor::new()?,
            scroller: WaveScroller::new(viewport.width)?,
            clock: config.clock.build(config.fps),
            config,
            assets,
            state,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Decoded assets in use.
    pub fn assets(&self) -> &DemoAssets {
        &self.assets
    }

    /// Current state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Frame size the engine draws.
    pub fn viewport(&self) -> Canvas {
        self.config.viewport
    }

    /// Advance the demo by one tick, reading the time from the engine's clock.
    ///
    /// The clock is created with the engine, so wall-clock time keeps running across calls.
    pub fn step(&mut self) {
        let elapsed_secs = self.clock.elapsed_secs(FrameIndex(self.state.ticks));
        self.update(elapsed_secs);
    }

    /// Advance the demo by one tick at `elapsed_secs` since start.
    pub fn update(&mut self, elapsed_secs: f64) {
        let st = &mut self.state;
        st.elapsed_secs = elapsed_secs;
        st.ticks += 1;

        match st.stage {
            Stage::Intro => {
                // The rest of the previous step lands after that frame was drawn.
                if st.ticks > 1 {
                    st.intro
                        .advance(self.config.intro_speed - INTRO_LEAD_PX, &self.intro_text);
                }
                if self.intro_text.byte_at(st.intro.char_index()) == INTRO_TRIGGER {
                    st.stage = Stage::Main;
                    tracing::info!(tick = st.ticks, elapsed_secs, "intro finished");
                }
                st.intro.advance(INTRO_LEAD_PX, &self.intro_text);
                if st.stage == Stage::Intro {
                    return;
                }
            }
            Stage::Main => st.floor_motion.step(),
        }

        // The banner counters step past the previous drawn frame.
        if st.main_ticks > 0 {
            st.banner
                .advance(self.config.banner_speed, &self.banner_text);
        }
        st.floor_scroll.advance(&st.floor_motion);
        let phase_before = st.animator.phase_state;
        st.orbit = animate(&mut st.animator, elapsed_secs, self.config.viewport);
        if st.animator.phase_state != phase_before {
            tracing::info!(elapsed_secs, "orbit warm-up finished");
        }
        st.main_ticks += 1;
    }

    /// Draw the current state onto `dst`, which must match the viewport.
    pub fn draw(&mut self, dst: &mut Surface) -> DocResult<()> {
        if dst.canvas() != self.config.viewport {
            return Err(DocError::render(format!(
                "target surface is {}x{}, engine viewport is {}x{}",
                dst.width(),
                dst.height(),
                self.config.viewport.width,
                self.config.viewport.height
            )));
        }
        dst.fill(Rgba8Premul::opaque(0, 0, 0));

        match self.state.stage {
            Stage::Intro => {
                self.intro_layer.clear();
                draw_scroll_text(
                    &mut self.intro_layer,
                    &self.assets.intro_font,
                    &self.intro_text,
                    self.state.intro,
                );
                let full = Rect::new(
                    0.0,
                    0.0,
                    f64::from(self.intro_layer.width()),
                    f64::from(self.intro_layer.height()),
                );
                dst.blit(
                    &self.intro_layer,
                    full,
                    Point::new(0.0, BANNER_Y),
                    CompositeMode::SourceOver,
                );
                Ok(())
            }
            Stage::Main => self.draw_main(dst),
        }
    }

    fn draw_main(&mut self, dst: &mut Surface) -> DocResult<()> {
        let assets = &self.assets;
        dst.paint(CompositeMode::SourceOver, |p| {
            p.draw_image(&assets.backdrop, Affine::scale_non_uniform(77.0, 1.0));
            p.draw_image(&assets.mountains, Affine::IDENTITY);
            Ok(())
        })?;

        self.floor.draw(&self.state.floor_scroll, dst)?;
        self.scroller.draw(
            dst,
            &assets.banner_font,
            &self.banner_text,
            &self.state.banner,
        );

        let calls = emit_draw_calls(&self.state.orbit);
        dst.paint(CompositeMode::SourceOver, |p| {
            for call in &calls {
                let image = match call.image {
                    SpriteImage::Shadow(bucket) => &assets.shadows[bucket],
                    SpriteImage::Body => &assets.ball,
                };
                p.draw_image(image, call.transform);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/demo.rs"]
mod tests;
