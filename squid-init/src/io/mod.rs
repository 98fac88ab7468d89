//! I/O helpers for the launch sequence.

pub mod dirs;
pub mod process;
