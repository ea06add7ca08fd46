use super::*;

#[test]
fn frame_range_validates_and_counts() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert!(!r.is_empty());
    assert_eq!(
        r.iter().collect::<Vec<_>>(),
        vec![FrameIndex(2), FrameIndex(3), FrameIndex(4)]
    );
}

#[test]
fn fps_rejects_zero_and_converts_time() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(25, 1).unwrap();
    assert_eq!(fps.frame_to_ms(FrameIndex(0)), 0.0);
    assert_eq!(fps.frame_to_ms(FrameIndex(25)), 1000.0);
    assert_eq!(fps.ms_to_frames_ceil(1000.0), 25);
    assert_eq!(fps.ms_to_frames_ceil(1001.0), 26);
}

#[test]
fn hex_colors_parse_in_all_forms() {
    assert_eq!(Rgba8::from_hex("#ffafcc").unwrap(), Rgba8::rgb(0xff, 0xaf, 0xcc));
    assert_eq!(Rgba8::from_hex("76C893").unwrap(), Rgba8::rgb(0x76, 0xc8, 0x93));
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::rgb(255, 255, 255));
    assert_eq!(
        Rgba8::from_hex("#01020380").unwrap(),
        Rgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 0x80
        }
    );
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn hex_round_trips_through_serde() {
    let c = Rgba8::rgb(0x1a, 0x75, 0x9f);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#1a759f\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn color_lerp_endpoints() {
    let a = Rgba8::rgb(0, 0, 0);
    let b = Rgba8::rgb(200, 100, 50);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8::rgb(100, 50, 25));
}
