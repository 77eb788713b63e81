//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;

pub use input::InputLatch;
pub(crate) use input::{drop_paused_input, read_input};
