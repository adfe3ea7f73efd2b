pub(crate) fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Linear channel interpolation, truncated toward zero.
///
/// `t` is clamped to `[0, 1]`, so the result always lies between `a` and `b`.
pub(crate) fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    v.trunc().clamp(0.0, 255.0) as u8
}

/// Degrees to radians.
pub(crate) fn radians(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}
