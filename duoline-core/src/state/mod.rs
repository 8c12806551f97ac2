//! Controller lifecycle
//!
//! The display controller is unusable until its power-up sequence has
//! run to completion. The state machine is explicit, finite, and
//! deterministic; only the display driver advances it.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::ControllerState;
