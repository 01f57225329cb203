use super::*;

#[test]
fn origin_lands_on_biased_centre() {
    let s = project(Point3::new(0.0, 0.0, 0.0), 400.0, 768, 540);
    assert_eq!(s.u, 384.0);
    assert_eq!(s.v, 270.0 + VERTICAL_CENTER_BIAS);
    assert!((s.w - SPRITE_SCALE_FACTOR).abs() < 1e-12);
    assert_eq!(s.z, 0.0);
}

#[test]
fn scale_strictly_decreases_with_depth() {
    let mut last = f64::INFINITY;
    for step in 0..=60 {
        let z = -150.0 + f64::from(step) * 5.0;
        let s = project(Point3::new(30.0, -20.0, z), 400.0, 768, 540);
        assert!(s.w < last, "z={z} w={} last={last}", s.w);
        assert_eq!(s.z, z);
        last = s.w;
    }
}

#[test]
fn farther_points_converge_towards_centre() {
    let near = project(Point3::new(100.0, 0.0, -100.0), 400.0, 768, 540);
    let far = project(Point3::new(100.0, 0.0, 100.0), 400.0, 768, 540);
    assert!(near.u - 384.0 > far.u - 384.0);
}
