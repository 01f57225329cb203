pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Euclidean wrap of `v` into `[0, m)`.
///
/// `rem_euclid` can round up to exactly `m` for tiny negative inputs; that case folds to `0`.
pub(crate) fn wrap_mod(v: f64, m: f64) -> f64 {
    let r = v.rem_euclid(m);
    if r >= m { 0.0 } else { r }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
