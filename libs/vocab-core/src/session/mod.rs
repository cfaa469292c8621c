//! Quiz session state machines.

pub mod matching;
pub mod sentence;
