//! Play/pause/restart/reverse state machine.
//!
//! The controller owns the mounted [`Surface`] and is the only thing that mutates it. Time is
//! passed in explicitly: `now_ms` on every call is the host clock, and [`Controller::tick`] is
//! the per-frame callback that writes interpolated attributes. Invalid-state calls and calls
//! made before a surface is mounted are silent no-ops.

use crate::animation::transition::{Timing, Transition};
use crate::render::surface::Surface;
use crate::scene::state::{Scene, SceneState};

/// Playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// Nothing running; either never played or the last transition completed.
    Idle,
    /// A transition is in flight.
    Playing,
    /// A transition was interrupted; elements hold their frozen values.
    Paused,
}

/// Which layout the next `play` animates toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Initial layout to moved layout.
    #[default]
    Forward,
    /// Moved layout back to initial layout.
    Reverse,
}

impl Direction {
    /// The other direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// A user-facing control button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Start or resume.
    Play,
    /// Freeze in place.
    Pause,
    /// Reset to the intro layout and play forward.
    Restart,
    /// Flip direction and play.
    Reverse,
}

/// Which controls are currently enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    /// Disabled while animating.
    pub play: bool,
    /// Enabled only while animating.
    pub pause: bool,
    /// Always enabled.
    pub restart: bool,
    /// Always enabled.
    pub reverse: bool,
}

impl Controls {
    /// Return `true` when `control` is enabled.
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Play => self.play,
            Control::Pause => self.pause,
            Control::Restart => self.restart,
            Control::Reverse => self.reverse,
        }
    }
}

/// Result of a [`Controller::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No transition is running.
    Inactive,
    /// A transition is still in flight.
    Running,
    /// The last token reached its target during this tick; the controller is idle again.
    Ended,
}

/// Drives the element set between the two layouts of a [`Scene`].
#[derive(Debug)]
pub struct Controller {
    scene: Scene,
    timing: Timing,
    surface: Option<Surface>,
    state: PlayState,
    direction: Direction,
    active: Option<Transition>,
}

impl Controller {
    /// Unmounted controller; every operation is a no-op until [`Controller::mount`].
    pub fn new(scene: Scene, timing: Timing) -> Self {
        Self {
            scene,
            timing,
            surface: None,
            state: PlayState::Idle,
            direction: Direction::Forward,
            active: None,
        }
    }

    /// Controller with `surface` already mounted.
    pub fn mounted(scene: Scene, timing: Timing, surface: Surface) -> Self {
        let mut c = Self::new(scene, timing);
        c.mount(surface);
        c
    }

    /// Attach the element set to animate. Replaces (and drops) any previous surface.
    ///
    /// A fresh mount always starts out playing [`Direction::Forward`].
    pub fn mount(&mut self, surface: Surface) {
        tracing::debug!(elements = surface.elements().len(), "mount");
        self.active = None;
        self.state = PlayState::Idle;
        self.direction = Direction::Forward;
        self.surface = Some(surface);
    }

    /// Detach the surface, cancelling any in-flight transition.
    pub fn unmount(&mut self) -> Option<Surface> {
        self.active = None;
        self.state = PlayState::Idle;
        self.surface.take()
    }

    /// Return `true` when a surface is mounted.
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// The mounted surface.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Both layouts.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Transition timing.
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Current playback state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Direction the next `play` will animate in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The in-flight transition, if any.
    pub fn transition(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    /// Return `true` while a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Enablement of the four control buttons.
    pub fn controls(&self) -> Controls {
        let animating = self.is_animating();
        Controls {
            play: !animating,
            pause: animating,
            restart: true,
            reverse: true,
        }
    }

    /// Dispatch a button press to the operation of the same name.
    pub fn press(&mut self, control: Control, now_ms: f64) {
        match control {
            Control::Play => self.play(now_ms),
            Control::Pause => self.pause(now_ms),
            Control::Restart => self.restart(now_ms),
            Control::Reverse => self.reverse(now_ms),
        }
    }

    /// Start or resume a transition toward the layout selected by the direction.
    ///
    /// No-op while already playing.
    pub fn play(&mut self, now_ms: f64) {
        if self.state == PlayState::Playing {
            return;
        }
        let Some(surface) = self.surface.as_ref() else {
            return;
        };

        let target: &SceneState = match self.direction {
            Direction::Forward => &self.scene.moved,
            Direction::Reverse => &self.scene.initial,
        };
        let transition = Transition::new(now_ms, self.timing, surface, target);
        tracing::debug!(
            now_ms,
            direction = ?self.direction,
            end_ms = transition.end_ms(),
            "play"
        );
        self.active = Some(transition);
        self.state = PlayState::Playing;
    }

    /// Interrupt the in-flight transition, freezing every element at its value at `now_ms`.
    ///
    /// No-op unless playing.
    pub fn pause(&mut self, now_ms: f64) {
        if self.state != PlayState::Playing {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        if let Some(transition) = self.active.take() {
            transition.apply(surface, now_ms);
        }
        self.state = PlayState::Paused;
        tracing::debug!(now_ms, "pause");
    }

    /// Reset every element to the intro layout and play forward.
    pub fn restart(&mut self, now_ms: f64) {
        if self.surface.is_none() {
            return;
        }
        self.pause(now_ms);
        self.direction = Direction::Forward;
        if let Some(surface) = self.surface.as_mut() {
            surface.join(&self.scene.initial);
        }
        tracing::debug!(now_ms, "restart");
        self.play(now_ms);
    }

    /// Flip the direction and play from wherever the elements are.
    pub fn reverse(&mut self, now_ms: f64) {
        if self.surface.is_none() {
            return;
        }
        self.pause(now_ms);
        self.direction = self.direction.flipped();
        tracing::debug!(now_ms, direction = ?self.direction, "reverse");
        self.play(now_ms);
    }

    /// Frame callback: write interpolated attributes for `now_ms`.
    ///
    /// Once the last token completes, every element is left exactly at its target and the
    /// controller returns to [`PlayState::Idle`].
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if self.state != PlayState::Playing {
            return TickOutcome::Inactive;
        }
        let (Some(surface), Some(transition)) = (self.surface.as_mut(), self.active.as_ref())
        else {
            return TickOutcome::Inactive;
        };

        if transition.is_finished(now_ms) {
            transition.apply(surface, transition.end_ms());
            self.active = None;
            self.state = PlayState::Idle;
            tracing::debug!(now_ms, "transition ended");
            return TickOutcome::Ended;
        }

        transition.apply(surface, now_ms);
        TickOutcome::Running
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/controller.rs"]
mod tests;
