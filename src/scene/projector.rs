use crate::scene::vec3::Point3;

/// Vertical offset added to the projected screen centre.
pub const VERTICAL_CENTER_BIAS: f64 = 40.0;
/// Factor applied to the perspective scale to get the sprite draw scale.
pub const SPRITE_SCALE_FACTOR: f64 = 0.7;

/// A 3D point after perspective projection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedSprite {
    /// Screen-space x.
    pub u: f64,
    /// Screen-space y.
    pub v: f64,
    /// Uniform draw scale.
    pub w: f64,
    /// Depth of the source point, kept for sorting.
    pub z: f64,
}

/// Project `point` onto a `canvas_width` x `canvas_height` viewport.
///
/// Callers keep `focal_length + point.z` well above zero; the scale diverges as it approaches
/// zero and flips sign past it.
pub fn project(
    point: Point3,
    focal_length: f64,
    canvas_width: u32,
    canvas_height: u32,
) -> ProjectedSprite {
    let center_x = f64::from(canvas_width) / 2.0;
    let center_y = f64::from(canvas_height) / 2.0 + VERTICAL_CENTER_BIAS;

    let scale = focal_length / (focal_length + point.z);
    ProjectedSprite {
        u: point.x * scale + center_x,
        v: point.y * scale + center_y,
        w: scale * SPRITE_SCALE_FACTOR,
        z: point.z,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/projector.rs"]
mod tests;
