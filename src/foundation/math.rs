pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Exact at both endpoints.
pub(crate) fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    lerp_f64(f64::from(a), f64::from(b), t)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Composite premultiplied RGBA8 `src` over an opaque background, writing opaque RGBA8.
pub(crate) fn flatten_premul_over_bg(dst: &mut [u8], src: &[u8], bg: [u8; 3]) -> bool {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return false;
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let inv = 255 - u16::from(s[3]);
        for c in 0..3 {
            d[c] = (u16::from(s[c]) + mul_div255_u16(u16::from(bg[c]), inv)).min(255) as u8;
        }
        d[3] = 255;
    }
    true
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
