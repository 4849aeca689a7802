//! A CHIP-8 virtual machine.
//!
//! The machine itself performs no I/O: the host loads a program, drives
//! [`Machine::step`] at its chosen instruction rate, calls
//! [`Machine::tick_timers`] once per 60Hz frame, feeds key state in through
//! [`Machine::set_key`], and renders the framebuffer however it likes.

pub use error::{Fault, LoadError};
pub use machine::{Machine, Status};
pub use quirks::Quirks;
pub use state::FrameBuffer;

pub mod constants;
mod error;
mod instruction;
mod machine;
mod opcode;
mod operations;
mod quirks;
mod state;
