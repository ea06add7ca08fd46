use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 128), 128);
}

#[test]
fn lerp_u8_hits_endpoints_and_midpoint() {
    assert_eq!(lerp_u8(10, 200, 0.0), 10);
    assert_eq!(lerp_u8(10, 200, 1.0), 200);
    assert_eq!(lerp_u8(0, 255, 0.5), 128);
    assert_eq!(lerp_u8(200, 10, 0.5), 105);
}

#[test]
fn lerp_f64_is_exact_at_endpoints() {
    assert_eq!(lerp_f64(0.1, 0.3, 0.0), 0.1);
    assert_eq!(lerp_f64(0.1, 0.3, 1.0), 0.3);
    assert_eq!(lerp_f64(-4.0, 4.0, 0.5), 0.0);
}

#[test]
fn flatten_alpha_0_returns_bg() {
    let mut dst = [0u8; 4];
    assert!(flatten_premul_over_bg(&mut dst, &[0, 0, 0, 0], [10, 20, 30]));
    assert_eq!(dst, [10, 20, 30, 255]);
}

#[test]
fn flatten_opaque_is_identity() {
    let mut dst = [0u8; 4];
    assert!(flatten_premul_over_bg(&mut dst, &[1, 2, 3, 255], [10, 20, 30]));
    assert_eq!(dst, [1, 2, 3, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = [0u8; 8];
    assert!(!flatten_premul_over_bg(&mut dst, &[0u8; 4], [0, 0, 0]));
}
