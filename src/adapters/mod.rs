//! Adapters implementing domain ports.

pub mod random_choices;
pub mod scripted_choices;

pub use random_choices::RandomChoices;
pub use scripted_choices::ScriptedChoices;
