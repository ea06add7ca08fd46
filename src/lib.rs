//! packbanner is a circle-packing banner animation.
//!
//! About a thousand small disks are packed into one tight cluster (the intro layout). Every
//! fourth disk belongs to group A, the rest to group B; each group is also packed on its own
//! and moved into a horizontal band with its own color (the reveal layout). A controller
//! animates the disks between the two layouts with staggered, eased transitions and
//! play/pause/restart/reverse controls.
//!
//! The widget is headless and clock-driven:
//!
//! - Mount a [`BannerAnimation`] from a [`BannerConfig`] and a viewport width
//! - Press [`Control`]s and call [`BannerAnimation::tick`] with the host clock
//! - Rasterize the element set with a [`RenderBackend`], or replay a [`Script`] through a
//!   [`RenderSession`] into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Transitions, easing and the playback controller.
pub mod animation;
/// The mounted banner widget.
pub mod banner;
/// Banner configuration.
pub mod config;
/// Frame sinks.
pub mod encode;
/// Circle packing.
pub mod layout;
/// Element surface and rasterization.
pub mod render;
/// Token model and layouts.
pub mod scene;
/// Scripted playback and range rendering.
pub mod session;

pub use crate::foundation::core::{Canvas, Circle, Fps, FrameIndex, FrameRange, Point, Rgba8, Vec2};
pub use crate::foundation::error::{BannerError, BannerResult};

pub use crate::animation::controller::{
    Control, Controller, Controls, Direction, PlayState, TickOutcome,
};
pub use crate::animation::ease::Ease;
pub use crate::animation::transition::{Timing, Transition};
pub use crate::banner::BannerAnimation;
pub use crate::config::{BannerConfig, Palette};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::layout::pack::{Packing, enclose, pack_siblings};
pub use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::surface::{Element, JoinStats, Surface};
pub use crate::scene::state::{Scene, SceneState, initial_state, moved_state};
pub use crate::scene::token::{Group, Token};
pub use crate::session::{RenderSession, RenderStats, Script, ScriptEvent};
