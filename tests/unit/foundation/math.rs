use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn wrap_mod_stays_in_half_open_range() {
    assert_eq!(wrap_mod(33.0, 32.0), 1.0);
    assert_eq!(wrap_mod(-1.0, 32.0), 31.0);
    assert_eq!(wrap_mod(32.0, 32.0), 0.0);
    let tiny = wrap_mod(-1e-20, 32.0);
    assert!((0.0..32.0).contains(&tiny));
}
