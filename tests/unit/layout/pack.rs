use super::*;

fn assert_no_overlap(circles: &[Circle]) {
    for (i, a) in circles.iter().enumerate() {
        for (j, b) in circles.iter().enumerate().skip(i + 1) {
            let dist = a.center.distance(b.center);
            assert!(
                dist + 1e-5 >= a.radius + b.radius,
                "disks {i} and {j} overlap: dist {dist}, radii {} + {}",
                a.radius,
                b.radius
            );
        }
    }
}

fn assert_encloses(outer: Circle, circles: &[Circle]) {
    for c in circles {
        assert!(
            outer.center.distance(c.center) + c.radius <= outer.radius + 1e-6,
            "{c:?} escapes {outer:?}"
        );
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let p = pack_siblings(&[]).unwrap();
    assert!(p.circles.is_empty());
    assert!(p.enclosing.is_none());
    assert!(enclose(&[]).is_none());
}

#[test]
fn invalid_radii_are_rejected() {
    assert!(pack_siblings(&[1.0, 0.0]).is_err());
    assert!(pack_siblings(&[1.0, -2.0]).is_err());
    assert!(pack_siblings(&[f64::NAN]).is_err());
    assert!(pack_siblings(&[f64::INFINITY]).is_err());
}

#[test]
fn single_disk_sits_at_origin() {
    let p = pack_siblings(&[2.5]).unwrap();
    assert_eq!(p.circles, vec![Circle::new(Point::ORIGIN, 2.5)]);
    assert_eq!(p.enclosing, Some(Circle::new(Point::ORIGIN, 2.5)));
}

#[test]
fn two_disks_are_tangent_on_x_axis() {
    let p = pack_siblings(&[1.0, 1.0]).unwrap();
    assert_eq!(p.circles[0].center, Point::new(-1.0, 0.0));
    assert_eq!(p.circles[1].center, Point::new(1.0, 0.0));
    let e = p.enclosing.unwrap();
    assert!((e.radius - 2.0).abs() < 1e-9);
    assert!(e.center.distance(Point::ORIGIN) < 1e-9);
}

#[test]
fn three_disks_are_mutually_tangent() {
    let p = pack_siblings(&[1.0, 1.0, 1.0]).unwrap();
    for (i, a) in p.circles.iter().enumerate() {
        for b in p.circles.iter().skip(i + 1) {
            assert!((a.center.distance(b.center) - 2.0).abs() < 1e-9);
        }
    }
}

#[test]
fn equal_disks_never_overlap() {
    for n in [4usize, 5, 8, 13, 50, 200] {
        let p = pack_siblings(&vec![2.7; n]).unwrap();
        assert_eq!(p.circles.len(), n);
        assert_no_overlap(&p.circles);
    }
}

#[test]
fn mixed_radii_never_overlap() {
    let radii: Vec<f64> = (0..120).map(|i| 1.0 + f64::from(i % 7) * 0.5).collect();
    let p = pack_siblings(&radii).unwrap();
    assert_no_overlap(&p.circles);
    for (c, r) in p.circles.iter().zip(&radii) {
        assert_eq!(c.radius, *r);
    }
}

#[test]
fn pack_is_centered_on_its_enclosing_circle() {
    let p = pack_siblings(&vec![1.0; 64]).unwrap();
    let e = p.enclosing.unwrap();
    assert_eq!(e.center, Point::ORIGIN);
    assert_encloses(e, &p.circles);

    // 64 unit disks cannot fit in a circle much smaller than sqrt(64) units.
    assert!(e.radius >= 8.0);
    assert!(e.radius < 12.0);
}

#[test]
fn packing_is_deterministic() {
    let radii = vec![1.5; 300];
    let a = pack_siblings(&radii).unwrap();
    let b = pack_siblings(&radii).unwrap();
    assert_eq!(a, b);
}

#[test]
fn enclose_covers_scattered_circles() {
    let circles = vec![
        Circle::new(Point::new(-5.0, 0.0), 1.0),
        Circle::new(Point::new(4.0, 3.0), 2.0),
        Circle::new(Point::new(0.0, -6.0), 0.5),
        Circle::new(Point::new(1.0, 1.0), 0.25),
    ];
    let e = enclose(&circles).unwrap();
    assert_encloses(e, &circles);
}

#[test]
fn enclose_of_one_circle_is_itself() {
    let c = Circle::new(Point::new(3.0, -2.0), 4.0);
    assert_eq!(enclose(&[c]), Some(c));
}

#[test]
fn lcg_matches_reference_sequence() {
    let mut rng = Lcg::new();
    let first = rng.next_f64();
    assert_eq!(first, 1_015_568_748.0 / 4_294_967_296.0);
    assert!((0.0..1.0).contains(&rng.next_f64()));
}
