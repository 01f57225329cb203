use std::f64::consts::{PI, TAU};

use super::*;

fn assert_close(a: Point3, b: Point3) {
    assert!((a.x - b.x).abs() < 1e-9, "{a:?} vs {b:?}");
    assert!((a.y - b.y).abs() < 1e-9, "{a:?} vs {b:?}");
    assert!((a.z - b.z).abs() < 1e-9, "{a:?} vs {b:?}");
}

#[test]
fn rotation_then_inverse_is_identity() {
    let p = Point3::new(150.0, -42.0, 17.5);
    for step in 0..64 {
        let theta = -3.0 * PI + f64::from(step) * 0.37;
        assert_close(p.rotated_y(theta).rotated_y(-theta), p);
    }
}

#[test]
fn full_turn_is_identity() {
    let p = Point3::new(-12.0, 3.0, 99.0);
    assert_close(p.rotated_y(TAU), p);
}

#[test]
fn quarter_turn_moves_x_into_negative_z() {
    let p = Point3::new(1.0, 5.0, 0.0).rotated_y(PI / 2.0);
    assert_close(p, Point3::new(0.0, 5.0, -1.0));
}

#[test]
fn add_is_componentwise() {
    let p = Point3::new(1.0, 2.0, 3.0) + Point3::new(0.5, -2.0, 1.0);
    assert_eq!(p, Point3::new(1.5, 0.0, 4.0));
}
