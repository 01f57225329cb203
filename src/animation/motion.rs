//! Time-indexed kinematic recipes for the orbiting bodies.
//!
//! The timeline is cut into [`PHASE_DURATION_SECS`]-long phases. Each phase maps to one recipe
//! ([`motion_profile`]) and the active recipe is blended into the next one at the start of every
//! phase ([`blend_alpha`]). Phases 0 and 1 are intro recipes that the selection state machine
//! ([`PhaseState`], [`resolve_phase`]) never lets through: during the warm-up window they are
//! replaced by phase 7, afterwards by a rotation over phases 2..=7.

/// Length of one animation phase in seconds.
pub const PHASE_DURATION_SECS: f64 = 7.0;
/// Number of distinct phase indices produced by the raw timeline.
pub const PHASE_COUNT: u64 = 8;
/// End of the warm-up window (three phases).
pub const WARM_UP_SECS: f64 = 3.0 * PHASE_DURATION_SECS;

const FIRST_STEADY_PHASE: u32 = 2;
const STEADY_PHASE_COUNT: u32 = 6;
const LAST_PHASE: u32 = 7;
const BLEND_RAMP: f64 = 0.8;

/// Linear interpolation between two values.
pub trait Lerp: Sized {
    /// Interpolate from `a` (t = 0) to `b` (t = 1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }
}

/// Instantaneous kinematic recipe for one orbiting body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionParams {
    /// Shared orbital spin, degrees per step before the spin rate factor.
    pub spin_speed: f64,
    /// Vertical offset added to the body position.
    pub vertical_displace: f64,
    /// Angular spacing between consecutive bodies on the ring, in degrees.
    pub angular_spacing: f64,
    /// Distance from the rotation axis.
    pub orbit_radius: f64,
}

impl MotionParams {
    const fn new(
        spin_speed: f64,
        vertical_displace: f64,
        angular_spacing: f64,
        orbit_radius: f64,
    ) -> Self {
        Self {
            spin_speed,
            vertical_displace,
            angular_spacing,
            orbit_radius,
        }
    }
}

impl Lerp for MotionParams {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            spin_speed: f64::lerp(&a.spin_speed, &b.spin_speed, t),
            vertical_displace: f64::lerp(&a.vertical_displace, &b.vertical_displace, t),
            angular_spacing: f64::lerp(&a.angular_spacing, &b.angular_spacing, t),
            orbit_radius: f64::lerp(&a.orbit_radius, &b.orbit_radius, t),
        }
    }
}

/// Recipe for `phase` at time `t` for body `slot`.
///
/// Phases above 7 wrap into `2..=7`.
pub fn motion_profile(phase: u32, t: f64, slot: usize) -> MotionParams {
    let ts = t + slot as f64;
    match phase {
        0 | 1 => MotionParams::new(-5.0, 40.0, 0.0, 0.0),
        2 => MotionParams::new(-5.0, -60.0 - (t * 7.0).sin() * 95.0, 35.0, 150.0),
        3 => MotionParams::new(5.0, (ts * 0.5 * 13.0).sin() * 90.0 - 50.0, 16.0, 150.0),
        4 => {
            let u = ts * 0.125 * 13.5;
            let bounce = (u.sin() * 8.0 * u.cos() * 42.0).abs();
            MotionParams::new(5.0, 80.0 - bounce - 50.0, 20.0, 150.0)
        }
        5 => MotionParams::new(5.0, wobble(ts), 20.0, 150.0),
        6 => MotionParams::new(-7.0, wobble(ts), 20.0, 150.0),
        7 => {
            let hop = ((t * 0.6 + slot as f64 * 0.05) * 1.75).sin() * 70.0;
            MotionParams::new(-8.0, 10.0 - hop.abs() * 2.3, 20.0, 150.0)
        }
        _ => motion_profile(
            FIRST_STEADY_PHASE + (phase - FIRST_STEADY_PHASE) % STEADY_PHASE_COUNT,
            t,
            slot,
        ),
    }
}

fn wobble(ts: f64) -> f64 {
    let u = ts * 0.25 * 13.5;
    u.sin() * 8.0 * u.cos() * 22.0 - 50.0
}

/// Componentwise blend of two recipes.
pub fn blend(a: &MotionParams, b: &MotionParams, alpha: f64) -> MotionParams {
    MotionParams::lerp(a, b, alpha)
}

/// Position of the current phase's transition ramp at `t`, in `[0, 1]`.
///
/// The ramp reaches 1 after `1 / BLEND_RAMP` seconds and holds for the rest of the phase.
pub fn blend_alpha(t: f64) -> f64 {
    let within = (t / PHASE_DURATION_SECS).fract().max(0.0);
    (within * PHASE_DURATION_SECS * BLEND_RAMP).min(1.0)
}

/// Phase index read directly off the timeline, before intro suppression.
pub fn raw_phase_index(t: f64) -> u32 {
    ((t / PHASE_DURATION_SECS).floor().max(0.0) as u64 % PHASE_COUNT) as u32
}

/// Phase selection state: a one-way latch from warm-up to steady.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhaseState {
    /// First [`WARM_UP_SECS`] seconds; intro phases are shown as phase 7.
    #[default]
    WarmUp,
    /// Intro phases are remapped onto the steady rotation.
    Steady,
}

impl PhaseState {
    /// Next state at time `t`. Never returns to [`PhaseState::WarmUp`].
    pub fn advance(self, t: f64) -> Self {
        match self {
            Self::WarmUp if t > WARM_UP_SECS => Self::Steady,
            other => other,
        }
    }
}

/// Map a raw timeline index to the phase that is actually played.
pub fn resolve_phase(state: PhaseState, raw: u32, t: f64) -> u32 {
    if raw >= FIRST_STEADY_PHASE {
        return raw;
    }
    match state {
        PhaseState::WarmUp => LAST_PHASE,
        PhaseState::Steady => {
            let cycle = (t / PHASE_DURATION_SECS).floor().max(0.0) as u64;
            FIRST_STEADY_PHASE + (cycle % u64::from(STEADY_PHASE_COUNT)) as u32
        }
    }
}

/// Blended recipe for `slot` at `t`, along with the resolved phase index.
pub fn blended_motion(state: PhaseState, t: f64, slot: usize) -> (u32, MotionParams) {
    let phase = resolve_phase(state, raw_phase_index(t), t);
    let a = motion_profile(phase, t, slot);
    let b = motion_profile(phase + 1, t, slot);
    (phase, blend(&a, &b, blend_alpha(t)))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
