use super::*;
use crate::config::Palette;
use crate::foundation::core::Canvas;
use crate::scene::state::{initial_state, moved_state};

fn fixture(n: usize) -> (Surface, SceneState) {
    let initial = initial_state(n, 1.0, 0.0, Rgba8::rgb(255, 0, 0)).unwrap();
    let moved = moved_state(&initial, 200.0, 50.0, &Palette::default()).unwrap();
    let surface = Surface::render(
        Canvas {
            width: 200,
            height: 100,
        },
        Rgba8::rgb(0, 0, 0),
        &initial,
    );
    (surface, moved)
}

fn timing() -> Timing {
    Timing {
        duration_ms: 100.0,
        stagger_ms: 10.0,
        ease: Ease::Linear,
    }
}

#[test]
fn end_time_covers_last_stagger() {
    let (surface, moved) = fixture(5);
    let tr = Transition::new(1000.0, timing(), &surface, &moved);
    assert_eq!(tr.start_ms(), 1000.0);
    assert_eq!(tr.end_ms(), 1000.0 + 40.0 + 100.0);
    assert!(!tr.is_finished(1139.0));
    assert!(tr.is_finished(1140.0));
}

#[test]
fn empty_transition_ends_after_one_duration() {
    let (surface, moved) = fixture(0);
    let tr = Transition::new(0.0, timing(), &surface, &moved);
    assert_eq!(tr.end_ms(), 100.0);
}

#[test]
fn progress_is_staggered_by_key() {
    let (surface, moved) = fixture(5);
    let tr = Transition::new(0.0, timing(), &surface, &moved);
    assert_eq!(tr.progress(0, 50.0), 0.5);
    assert_eq!(tr.progress(2, 50.0), 0.3);
    assert_eq!(tr.progress(4, 30.0), 0.0);
    assert_eq!(tr.progress(4, 500.0), 1.0);
}

#[test]
fn sample_interpolates_between_endpoints() {
    let (surface, moved) = fixture(3);
    let tr = Transition::new(0.0, timing(), &surface, &moved);
    let from = surface.element(1).unwrap();
    let to = moved.get(1).unwrap();

    assert_eq!(tr.sample(1, 0.0), Some((from.center, from.fill)));
    assert_eq!(tr.sample(1, 110.0), Some((to.position, to.color)));

    let (mid, fill) = tr.sample(1, 60.0).unwrap();
    assert!((mid.x - (from.center.x + to.position.x) / 2.0).abs() < 1e-9);
    assert!((mid.y - (from.center.y + to.position.y) / 2.0).abs() < 1e-9);
    assert_eq!(fill, from.fill.lerp(to.color, 0.5));

    assert_eq!(tr.sample(99, 0.0), None);
}

#[test]
fn apply_writes_every_element() {
    let (mut surface, moved) = fixture(4);
    let tr = Transition::new(0.0, timing(), &surface, &moved);
    tr.apply(&mut surface, tr.end_ms());
    for (el, t) in surface.elements().iter().zip(moved.tokens()) {
        assert_eq!(el.center, t.position);
        assert_eq!(el.fill, t.color);
    }
}
