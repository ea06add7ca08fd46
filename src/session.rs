//! Scripted playback: replay control presses against a banner and render a frame range into a
//! [`FrameSink`].

use std::path::Path;

use crate::animation::controller::{Control, TickOutcome};
use crate::banner::BannerAnimation;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{BannerError, BannerResult};
use crate::render::backend::{FrameRGBA, RenderBackend};

/// One control press at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEvent {
    /// Press time in milliseconds from the start of the session.
    pub at_ms: f64,
    /// Button pressed.
    pub control: Control,
}

/// Control presses ordered by time; presses sharing a timestamp keep their listed order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Script {
    events: Vec<ScriptEvent>,
}

impl Script {
    /// Build a script, validating and ordering `events`.
    pub fn new(mut events: Vec<ScriptEvent>) -> BannerResult<Self> {
        if let Some(bad) = events
            .iter()
            .find(|e| !e.at_ms.is_finite() || e.at_ms < 0.0)
        {
            return Err(BannerError::validation(format!(
                "script event time must be finite and >= 0 (got {})",
                bad.at_ms
            )));
        }
        events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
        Ok(Self { events })
    }

    /// A single `play` at time zero.
    pub fn autoplay() -> Self {
        Self {
            events: vec![ScriptEvent {
                at_ms: 0.0,
                control: Control::Play,
            }],
        }
    }

    /// Parse a JSON array of `{"at_ms": .., "control": ..}` objects.
    pub fn from_json(s: &str) -> BannerResult<Self> {
        let events: Vec<ScriptEvent> = serde_json::from_str(s)?;
        Self::new(events)
    }

    /// Load a JSON script from disk.
    pub fn from_path(path: impl AsRef<Path>) -> BannerResult<Self> {
        use anyhow::Context as _;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Events in time order.
    pub fn events(&self) -> &[ScriptEvent] {
        &self.events
    }

    /// Time by which every scripted transition has finished, assuming each press starts a
    /// full-length transition.
    pub fn settle_ms(&self, transition_span_ms: f64) -> f64 {
        self.events
            .last()
            .map_or(0.0, |e| e.at_ms + transition_span_ms)
    }
}

/// Counters reported by [`RenderSession::render_range`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Script presses applied.
    pub presses: u64,
    /// Transitions that ran to completion.
    pub transitions_ended: u64,
}

/// Drives a banner along a timeline: applies due script presses, ticks, renders.
pub struct RenderSession {
    banner: BannerAnimation,
    script: Script,
    cursor: usize,
    fps: Fps,
    now_ms: Option<f64>,
    stats: RenderStats,
}

impl RenderSession {
    /// Session replaying `script` against `banner` at `fps`.
    pub fn new(banner: BannerAnimation, script: Script, fps: Fps) -> Self {
        Self {
            banner,
            script,
            cursor: 0,
            fps,
            now_ms: None,
            stats: RenderStats::default(),
        }
    }

    /// The banner being driven.
    pub fn banner(&self) -> &BannerAnimation {
        &self.banner
    }

    /// Presses being replayed.
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Time by which the script's last transition has landed.
    pub fn settle_ms(&self) -> f64 {
        let controller = self.banner.controller();
        let span = controller.timing().span_ms(controller.scene().len());
        self.script.settle_ms(span)
    }

    /// Output frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Counters so far.
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Apply every press due at or before `now_ms`, then tick.
    ///
    /// Time may not move backwards.
    pub fn advance_to(&mut self, now_ms: f64) -> BannerResult<TickOutcome> {
        if let Some(prev) = self.now_ms
            && now_ms < prev
        {
            return Err(BannerError::validation(format!(
                "session time must not go backwards ({now_ms} < {prev})"
            )));
        }
        self.now_ms = Some(now_ms);

        while let Some(ev) = self.script.events.get(self.cursor).copied() {
            if ev.at_ms > now_ms {
                break;
            }
            // Land any transition that finished before the press so the press sees an
            // idle banner.
            if self.banner.tick(ev.at_ms) == TickOutcome::Ended {
                self.stats.transitions_ended += 1;
            }
            tracing::debug!(at_ms = ev.at_ms, control = ?ev.control, "press");
            self.banner.press(ev.control, ev.at_ms);
            self.stats.presses += 1;
            self.cursor += 1;
        }

        let outcome = self.banner.tick(now_ms);
        if outcome == TickOutcome::Ended {
            self.stats.transitions_ended += 1;
        }
        Ok(outcome)
    }

    /// Advance to the timestamp of `idx` and rasterize.
    pub fn render_frame(
        &mut self,
        idx: FrameIndex,
        backend: &mut dyn RenderBackend,
    ) -> BannerResult<FrameRGBA> {
        self.advance_to(self.fps.frame_to_ms(idx))?;
        self.banner.render(backend)
    }

    /// Render every frame of `range` into `sink`.
    #[tracing::instrument(skip(self, backend, sink), fields(frames = range.len_frames()))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        backend: &mut dyn RenderBackend,
        sink: &mut dyn FrameSink,
    ) -> BannerResult<RenderStats> {
        let surface = self
            .banner
            .controller()
            .surface()
            .ok_or_else(|| BannerError::render("banner is not mounted"))?;
        let canvas = surface.canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.fps,
        })?;

        for idx in range.iter() {
            let frame = self.render_frame(idx, backend)?;
            sink.push_frame(idx, &frame)?;
            self.stats.frames += 1;
        }

        sink.end()?;
        tracing::info!(
            frames = self.stats.frames,
            presses = self.stats.presses,
            ended = self.stats.transitions_ended,
            "render complete"
        );
        Ok(self.stats)
    }
}
