use crate::foundation::math::mul_div255;

pub type StraightRgba8 = [u8; 4];

/// Source-over for straight (non-premultiplied) alpha, with an extra opacity
/// multiplier applied to the source.
pub fn over(dst: StraightRgba8, src: StraightRgba8, opacity: f32) -> StraightRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return [src[0], src[1], src[2], 255];
    }

    let da = mul_div255(u16::from(dst[3]), 255 - sa);
    let out_a = sa + da;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    out[3] = out_a.min(255) as u8;
    for i in 0..3 {
        let num = u32::from(src[i]) * u32::from(sa)
            + u32::from(dst[i]) * u32::from(da)
            + u32::from(out_a) / 2;
        out[i] = (num / u32::from(out_a)).min(255) as u8;
    }
    out
}
