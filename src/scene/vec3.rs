/// A point in the demo's right-handed 3D space (`y` grows downward, like screen space).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Depth coordinate, positive away from the viewer.
    pub z: f64,
}

impl Point3 {
    /// Construct a point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotate about the vertical axis by `angle_rad`; `y` is left untouched.
    pub fn rotated_y(self, angle_rad: f64) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        Self {
            x: self.z * sin + self.x * cos,
            y: self.y,
            z: self.z * cos - self.x * sin,
        }
    }
}

impl std::ops::Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/vec3.rs"]
mod tests;
