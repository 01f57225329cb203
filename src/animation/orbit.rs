use std::f64::consts::TAU;

use crate::{
    animation::motion::{PhaseState, blended_motion},
    foundation::{core::Canvas, math::wrap_mod},
    scene::{
        projector::{ProjectedSprite, project},
        vec3::Point3,
    },
};

/// Number of orbiting bodies.
pub const BODY_COUNT: usize = 4;
/// Focal length used to project bodies and shadows.
pub const FOCAL_LENGTH: f64 = 400.0;
/// Height of the ground plane shadows are dropped onto.
pub const SHADOW_GROUND_Y: f64 = 60.0;

const SPIN_RATE: f64 = 0.15;

/// Persistent animator state, advanced once per main-stage frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimatorState {
    /// Shared orbital spin in `[0, 2π)`.
    pub accumulated_rotation_rad: f64,
    /// Phase selection latch.
    pub phase_state: PhaseState,
}

/// Projected bodies and their shadows for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitFrame {
    /// Phase that drove this frame.
    pub phase: u32,
    /// Projected body sprites, indexed by body slot.
    pub bodies: [ProjectedSprite; BODY_COUNT],
    /// Projected ground shadows, paired with `bodies` by index.
    pub shadows: [ProjectedSprite; BODY_COUNT],
}

/// Advance the animator to time `t` and project every body for a `viewport`-sized frame.
///
/// The shared spin is accumulated per body before it is applied, so body `i` sees the rotation
/// including its own contribution.
pub fn animate(state: &mut AnimatorState, t: f64, viewport: Canvas) -> OrbitFrame {
    state.phase_state = state.phase_state.advance(t);

    let mut frame = OrbitFrame::default();
    for slot in 0..BODY_COUNT {
        let (phase, params) = blended_motion(state.phase_state, t, slot);
        frame.phase = phase;

        let ring = Point3::new(params.orbit_radius, 0.0, 0.0)
            .rotated_y((params.angular_spacing * slot as f64).to_radians());
        let lifted = ring + Point3::new(0.0, params.vertical_displace, 0.0);

        state.accumulated_rotation_rad = wrap_mod(
            state.accumulated_rotation_rad + params.spin_speed.to_radians() * SPIN_RATE,
            TAU,
        );
        let body = lifted.rotated_y(state.accumulated_rotation_rad);
        let shadow = Point3::new(body.x, SHADOW_GROUND_Y, body.z);

        frame.bodies[slot] = project(body, FOCAL_LENGTH, viewport.width, viewport.height);
        frame.shadows[slot] = project(shadow, FOCAL_LENGTH, viewport.width, viewport.height);
    }
    frame
}

#[cfg(test)]
#[path = "../../tests/unit/animation/orbit.rs"]
mod tests;
