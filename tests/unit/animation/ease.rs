use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::QuadOut, Ease::CubicOut, Ease::CubicInOut];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn cubic_out_front_loads_motion() {
    assert!((Ease::CubicOut.apply(0.5) - 0.875).abs() < 1e-12);
    assert!(Ease::CubicOut.apply(0.1) > 0.1);
}

#[test]
fn default_is_cubic_out_and_serializes_snake_case() {
    assert_eq!(Ease::default(), Ease::CubicOut);
    assert_eq!(serde_json::to_string(&Ease::CubicOut).unwrap(), "\"cubic_out\"");
    let e: Ease = serde_json::from_str("\"quad_out\"").unwrap();
    assert_eq!(e, Ease::QuadOut);
}
