use super::*;
use crate::animation::ease::Ease;
use crate::config::BannerConfig;
use crate::foundation::core::{Canvas, Point};

fn config() -> BannerConfig {
    BannerConfig {
        token_count: 8,
        radius: 1.0,
        padding: 0.0,
        height: 60.0,
        duration_ms: 100.0,
        stagger_ms: 10.0,
        ease: Ease::CubicOut,
        ..BannerConfig::default()
    }
}

fn surface_for(scene: &Scene) -> Surface {
    Surface::render(
        Canvas {
            width: 80,
            height: 60,
        },
        crate::foundation::core::Rgba8::rgb(0, 0, 0),
        &scene.initial,
    )
}

fn mounted() -> Controller {
    let cfg = config();
    let scene = Scene::build(&cfg, 80.0).unwrap();
    let surface = surface_for(&scene);
    Controller::mounted(scene, Timing::from_config(&cfg), surface)
}

fn assert_matches_state(c: &Controller, state: &SceneState) {
    let surface = c.surface().unwrap();
    for (el, t) in surface.elements().iter().zip(state.tokens()) {
        assert_eq!(el.center, t.position, "element {}", el.key);
        assert_eq!(el.fill, t.color, "element {}", el.key);
    }
}

fn strictly_between(p: Point, a: Point, b: Point) -> bool {
    let ab = a.distance(b);
    let ap = a.distance(p);
    let pb = p.distance(b);
    ap > 0.0 && pb > 0.0 && (ap + pb - ab).abs() < 1e-9
}

#[test]
fn unmounted_controller_ignores_everything() {
    let cfg = config();
    let mut c = Controller::new(Scene::build(&cfg, 80.0).unwrap(), Timing::from_config(&cfg));
    assert!(!c.is_mounted());

    c.play(0.0);
    c.reverse(1.0);
    c.restart(2.0);
    c.pause(3.0);
    assert_eq!(c.state(), PlayState::Idle);
    assert_eq!(c.direction(), Direction::Forward);
    assert!(c.transition().is_none());
    assert_eq!(c.tick(4.0), TickOutcome::Inactive);
}

#[test]
fn controls_follow_play_state() {
    let mut c = mounted();
    let idle = c.controls();
    assert!(idle.play && !idle.pause && idle.restart && idle.reverse);

    c.play(0.0);
    let playing = c.controls();
    assert!(!playing.play && playing.pause && playing.restart && playing.reverse);
    assert!(playing.is_enabled(Control::Pause));
    assert!(!playing.is_enabled(Control::Play));

    c.pause(10.0);
    assert!(c.controls().play);
    assert!(!c.controls().pause);
}

#[test]
fn play_while_playing_keeps_the_first_transition() {
    let mut c = mounted();
    c.play(0.0);
    let first = c.transition().cloned().unwrap();
    c.play(50.0);
    assert_eq!(c.transition(), Some(&first));
    assert_eq!(c.transition().unwrap().start_ms(), 0.0);
}

#[test]
fn forward_run_ends_on_last_token_at_moved_layout() {
    let mut c = mounted();
    c.play(0.0);
    let end = c.transition().unwrap().end_ms();
    assert_eq!(end, 7.0 * 10.0 + 100.0);

    assert_eq!(c.tick(50.0), TickOutcome::Running);
    // Token 0 is done well before the last token.
    assert_eq!(c.tick(120.0), TickOutcome::Running);
    assert_eq!(
        c.surface().unwrap().element(0).unwrap().center,
        c.scene().moved.get(0).unwrap().position
    );

    assert_eq!(c.tick(end), TickOutcome::Ended);
    assert_eq!(c.state(), PlayState::Idle);
    assert!(c.transition().is_none());
    let moved = c.scene().moved.clone();
    assert_matches_state(&c, &moved);
    assert_eq!(c.tick(end + 10.0), TickOutcome::Inactive);
}

#[test]
fn pause_freezes_started_tokens_strictly_between_endpoints() {
    let mut c = mounted();
    let initial = c.scene().initial.clone();
    let moved = c.scene().moved.clone();

    c.play(0.0);
    c.tick(20.0);
    c.pause(45.0);
    assert_eq!(c.state(), PlayState::Paused);

    let frozen = c.surface().unwrap().clone();
    for el in frozen.elements() {
        let from = initial.get(el.key).unwrap().position;
        let to = moved.get(el.key).unwrap().position;
        let started = (el.key as f64) * 10.0 < 45.0;
        if started {
            assert!(strictly_between(el.center, from, to), "element {}", el.key);
            assert_ne!(el.fill, initial.get(el.key).unwrap().color);
        } else {
            assert_eq!(el.center, from, "element {}", el.key);
        }
    }

    c.pause(80.0);
    assert_eq!(c.state(), PlayState::Paused);
    assert_eq!(c.surface().unwrap(), &frozen);
    assert_eq!(c.tick(90.0), TickOutcome::Inactive);
    assert_eq!(c.surface().unwrap(), &frozen);
}

#[test]
fn play_after_pause_resumes_toward_the_same_target() {
    let mut c = mounted();
    c.play(0.0);
    c.pause(40.0);
    c.play(1000.0);
    assert_eq!(c.state(), PlayState::Playing);
    let end = c.transition().unwrap().end_ms();
    assert_eq!(end, 1000.0 + 170.0);
    assert_eq!(c.tick(end), TickOutcome::Ended);
    let moved = c.scene().moved.clone();
    assert_matches_state(&c, &moved);
}

#[test]
fn reverse_toggles_direction_once_per_call() {
    let mut c = mounted();
    c.reverse(0.0);
    assert_eq!(c.direction(), Direction::Reverse);
    assert_eq!(c.state(), PlayState::Playing);
    c.reverse(5.0);
    assert_eq!(c.direction(), Direction::Forward);
    c.reverse(6.0);
    c.reverse(7.0);
    assert_eq!(c.direction(), Direction::Forward);
}

#[test]
fn reverse_after_reveal_returns_to_initial_layout() {
    let mut c = mounted();
    c.play(0.0);
    c.tick(500.0);
    assert_eq!(c.state(), PlayState::Idle);

    c.reverse(600.0);
    assert_eq!(c.direction(), Direction::Reverse);
    let end = c.transition().unwrap().end_ms();
    assert_eq!(c.tick(end), TickOutcome::Ended);
    let initial = c.scene().initial.clone();
    assert_matches_state(&c, &initial);
}

#[test]
fn reverse_mid_flight_starts_from_frozen_values() {
    let mut c = mounted();
    c.play(0.0);
    c.tick(60.0);
    c.reverse(60.0);
    let frozen = c.surface().unwrap().clone();
    let t = c.transition().unwrap();
    for el in frozen.elements() {
        assert_eq!(t.sample(el.key, 60.0), Some((el.center, el.fill)));
    }
}

#[test]
fn restart_resets_to_initial_before_playing_forward() {
    let mut c = mounted();
    c.play(0.0);
    c.tick(500.0);
    c.reverse(600.0);
    c.tick(650.0);
    assert_eq!(c.direction(), Direction::Reverse);

    c.restart(660.0);
    assert_eq!(c.direction(), Direction::Forward);
    assert_eq!(c.state(), PlayState::Playing);
    let initial = c.scene().initial.clone();
    assert_matches_state(&c, &initial);

    // The new transition starts exactly at the initial layout.
    assert_eq!(c.tick(660.0), TickOutcome::Running);
    assert_matches_state(&c, &initial);
}

#[test]
fn press_dispatches_to_operations() {
    let mut c = mounted();
    c.press(Control::Play, 0.0);
    assert_eq!(c.state(), PlayState::Playing);
    c.press(Control::Pause, 10.0);
    assert_eq!(c.state(), PlayState::Paused);
    c.press(Control::Reverse, 20.0);
    assert_eq!(c.direction(), Direction::Reverse);
    c.press(Control::Restart, 30.0);
    assert_eq!(c.direction(), Direction::Forward);
    assert_eq!(c.state(), PlayState::Playing);
}

#[test]
fn unmount_cancels_and_returns_surface() {
    let mut c = mounted();
    c.play(0.0);
    c.tick(30.0);
    let surface = c.unmount().unwrap();
    assert_eq!(c.state(), PlayState::Idle);
    assert!(c.transition().is_none());
    assert_eq!(c.tick(40.0), TickOutcome::Inactive);

    c.mount(surface);
    assert!(c.is_mounted());
    c.play(50.0);
    assert_eq!(c.state(), PlayState::Playing);
}

#[test]
fn remount_after_reverse_plays_forward() {
    let mut c = mounted();
    c.reverse(0.0);
    c.tick(1e9);
    assert_eq!(c.direction(), Direction::Reverse);

    c.unmount();
    let fresh = surface_for(c.scene());
    c.mount(fresh);
    assert_eq!(c.direction(), Direction::Forward);

    c.play(0.0);
    assert_eq!(c.tick(1e9), TickOutcome::Ended);
    let moved = c.scene().moved.clone();
    assert_matches_state(&c, &moved);
}

#[test]
fn control_names_are_snake_case() {
    let controls: Vec<Control> = serde_json::from_str(r#"["play","pause","restart","reverse"]"#)
        .unwrap();
    assert_eq!(
        controls,
        vec![Control::Play, Control::Pause, Control::Restart, Control::Reverse]
    );
}
