//! Scripted replay of input through a profile.
//!
//! Used by the `strokematch` binary to show what a profile does with a
//! given event sequence without a windowing system.

mod runner;
mod script;


pub use runner::{Replay, StepReport};
pub use script::{ScriptError, ScriptLine, Step, parse_script};
