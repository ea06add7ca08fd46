//! Rendering: the element set a controller animates, and rasterizers for it.

/// Frame type, backend trait and backend factory.
pub mod backend;
/// CPU rasterizer powered by `vello_cpu`.
pub mod cpu;
/// Keyed circle elements on a sized canvas.
pub mod surface;
