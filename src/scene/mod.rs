//! Token model and the two canonical layouts tokens animate between.

/// Initial (packed) and moved (grouped) layouts.
pub mod state;
/// Tokens and their group partition.
pub mod token;
