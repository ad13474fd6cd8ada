/// Host-facing façade tying a frame set, scheduler and render cache together.
pub mod transition_session;
