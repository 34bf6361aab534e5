//! Ports (trait boundaries) for external dependencies.
//!
//! The game core owns these traits; the adapters module implements them.

pub mod choice_source;

pub use choice_source::ChoiceSource;
