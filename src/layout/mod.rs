//! Circle layout.

/// Front-chain siblings packing and smallest enclosing circle.
pub mod pack;
