//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order; see
//! [`crate::session::RenderSession::render_range`].

/// MP4 output through the system `ffmpeg`.
pub mod ffmpeg;
/// Numbered PNG files in a directory.
pub mod png;
/// Sink trait and the in-memory sink.
pub mod sink;
