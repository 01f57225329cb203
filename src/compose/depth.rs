use crate::{
    animation::orbit::{BODY_COUNT, OrbitFrame},
    foundation::core::{Affine, Vec2},
    scene::projector::ProjectedSprite,
};

/// Number of shadow intensity variants.
pub const SHADOW_VARIANTS: usize = 4;
/// Unscaled body sprite size.
pub const BODY_SIZE: Vec2 = Vec2::new(64.0, 64.0);
/// Unscaled shadow sprite size.
pub const SHADOW_SIZE: Vec2 = Vec2::new(64.0, 16.0);

const SHADOW_MAX_LIFT: f64 = 26.0;

/// Which sprite image a draw call uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteImage {
    /// Shadow variant `0..SHADOW_VARIANTS`, darkest first.
    Shadow(usize),
    /// The body sprite.
    Body,
}

/// One sprite draw: image plus the transform placing it on the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    /// Image to draw.
    pub image: SpriteImage,
    /// Maps image-local pixels to frame pixels.
    pub transform: Affine,
}

/// Sprite indices ordered back to front (descending depth).
///
/// The sort is stable: equal depths keep their slot order.
pub fn depth_order<const N: usize>(sprites: &[ProjectedSprite; N]) -> [usize; N] {
    let mut order: [usize; N] = std::array::from_fn(|i| i);
    order.sort_by(|&a, &b| sprites[b].z.total_cmp(&sprites[a].z));
    order
}

/// Discrete shadow variant for a sprite drawn at scale `w`.
pub fn shadow_bucket(w: f64) -> usize {
    let step = (((w - 0.5) * 10.0) / 2.0).floor();
    (3.0 - step).clamp(0.0, 3.0) as usize
}

/// Upward offset applied to a shadow drawn at scale `w`, in pixels.
pub fn shadow_lift(w: f64) -> f64 {
    (1.0 - w).clamp(0.0, 1.0) * SHADOW_MAX_LIFT
}

/// Draw calls for one frame: every shadow back to front, then every body back to front.
pub fn emit_draw_calls(frame: &OrbitFrame) -> Vec<DrawCall> {
    let order = depth_order(&frame.bodies);
    let mut calls = Vec::with_capacity(2 * BODY_COUNT);

    for &idx in &order {
        let s = frame.shadows[idx];
        calls.push(DrawCall {
            image: SpriteImage::Shadow(shadow_bucket(s.w)),
            transform: placement(s, SHADOW_SIZE, shadow_lift(s.w)),
        });
    }
    for &idx in &order {
        calls.push(DrawCall {
            image: SpriteImage::Body,
            transform: placement(frame.bodies[idx], BODY_SIZE, 0.0),
        });
    }
    calls
}

// Scale first, then offset by the unscaled half size: sprites stay anchored on the nominal size
// whatever `w` is.
fn placement(s: ProjectedSprite, size: Vec2, lift: f64) -> Affine {
    Affine::translate(Vec2::new(s.u - size.x * 0.5, s.v - size.y * 0.5 - lift)) * Affine::scale(s.w)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/depth.rs"]
mod tests;
