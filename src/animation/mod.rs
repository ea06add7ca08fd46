/// Play/pause/restart/reverse state machine driving per-token transitions.
pub mod controller;
/// Easing curves.
pub mod ease;
/// Per-token timed transitions.
pub mod transition;
