use crate::animation::ease::Ease;
use crate::config::BannerConfig;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::lerp_f64;
use crate::render::surface::Surface;
use crate::scene::state::SceneState;

/// Timing shared by every token transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Duration of one token's transition, in milliseconds.
    pub duration_ms: f64,
    /// Start delay per token index, in milliseconds.
    pub stagger_ms: f64,
    /// Easing applied to each token's progress.
    pub ease: Ease,
}

impl Timing {
    /// Timing taken from a banner config.
    pub fn from_config(cfg: &BannerConfig) -> Self {
        Self {
            duration_ms: cfg.duration_ms,
            stagger_ms: cfg.stagger_ms,
            ease: cfg.ease,
        }
    }

    /// Start delay of the token with `key`.
    pub fn delay_ms(&self, key: usize) -> f64 {
        key as f64 * self.stagger_ms
    }

    /// Time from start until the last of `n` staggered tokens completes.
    pub fn span_ms(&self, n: usize) -> f64 {
        self.delay_ms(n.saturating_sub(1)) + self.duration_ms
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_config(&BannerConfig::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Track {
    from_center: Point,
    to_center: Point,
    from_fill: Rgba8,
    to_fill: Rgba8,
}

/// A staggered transition of every element from its current attributes to a target layout.
///
/// Start values are captured when the transition is created, so an interrupted transition
/// can be replaced by a fresh one starting from wherever the elements were frozen.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    start_ms: f64,
    timing: Timing,
    tracks: Vec<Track>,
}

impl Transition {
    /// Transition from the current state of `surface` toward `target`, starting at `start_ms`.
    ///
    /// Elements without a token in `target` keep their attributes.
    pub fn new(start_ms: f64, timing: Timing, surface: &Surface, target: &SceneState) -> Self {
        let tracks = surface
            .elements()
            .iter()
            .map(|el| {
                let (to_center, to_fill) = target
                    .get(el.key)
                    .map_or((el.center, el.fill), |t| (t.position, t.color));
                Track {
                    from_center: el.center,
                    to_center,
                    from_fill: el.fill,
                    to_fill,
                }
            })
            .collect();
        Self {
            start_ms,
            timing,
            tracks,
        }
    }

    /// Time the transition was started.
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Time at which the last token's transition completes.
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.timing.span_ms(self.tracks.len())
    }

    /// Return `true` once every token has reached its target.
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms()
    }

    /// Linear progress of the token with `key` at `now_ms`, in `[0, 1]`.
    pub fn progress(&self, key: usize, now_ms: f64) -> f64 {
        let local = now_ms - self.start_ms - self.timing.delay_ms(key);
        (local / self.timing.duration_ms).clamp(0.0, 1.0)
    }

    /// Interpolated center and fill of the token with `key` at `now_ms`.
    pub fn sample(&self, key: usize, now_ms: f64) -> Option<(Point, Rgba8)> {
        let track = self.tracks.get(key)?;
        let t = self.timing.ease.apply(self.progress(key, now_ms));
        let center = Point::new(
            lerp_f64(track.from_center.x, track.to_center.x, t),
            lerp_f64(track.from_center.y, track.to_center.y, t),
        );
        Some((center, track.from_fill.lerp(track.to_fill, t)))
    }

    /// Write the interpolated attributes at `now_ms` into `surface`.
    pub fn apply(&self, surface: &mut Surface, now_ms: f64) {
        for key in 0..self.tracks.len() {
            if let Some((center, fill)) = self.sample(key, now_ms) {
                surface.set_attrs(key, center, fill);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
