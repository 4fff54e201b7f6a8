//! Console-facing steps of the demo run.

pub mod render;
pub mod tasks;
