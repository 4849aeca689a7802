use std::io::Read;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{MAX_PROGRAM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Fault, LoadError};
use crate::instruction;
use crate::opcode::Opcode;
use crate::quirks::Quirks;
use crate::state::{FrameBuffer, KeyWait, State};

/// Host-visible execution status.
///
/// The machine only advances while `Running`. `Paused` is toggled by the
/// host; `Halted` is entered when an instruction faults and sticks until the
/// next reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    Halted,
}

/// # Machine
///
/// A complete CHIP-8 machine: memory, registers, call stack, timers, input
/// latch, and framebuffer, advanced one fetch-decode-execute cycle per call
/// to [`step`](Machine::step).
///
/// Supplies interfaces for:
/// - loading a program image
/// - pressing and releasing keys
/// - advancing the CPU and, independently, the timers
/// - inspecting its framebuffer for rendering by some display
///
/// All operations take `&mut self`; one caller owns the machine and is the
/// only scheduler.
pub struct Machine {
    pub(crate) state: State,
    pub(crate) quirks: Quirks,
    pub(crate) rng: StdRng,
    status: Status,
}

impl Machine {
    /// A machine with default quirks and an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_config(Quirks::default(), rand::random())
    }

    /// A machine with explicit quirk selection and random seed.
    ///
    /// A fixed seed makes every CXNN result reproducible.
    pub fn with_config(quirks: Quirks, seed: u64) -> Self {
        Machine {
            state: State::new(),
            quirks,
            rng: StdRng::seed_from_u64(seed),
            status: Status::Running,
        }
    }

    /// Zeroes all machine state, reinstalls the font, and resumes running.
    ///
    /// Quirk selection and the random source survive a reset.
    pub fn reset(&mut self) {
        self.state = State::new();
        self.status = Status::Running;
    }

    /// Load a program image, verbatim, at the entry point.
    ///
    /// The image is read fully before the machine is touched: an oversized
    /// or unreadable program leaves the machine unmodified.
    pub fn load(&mut self, reader: &mut dyn Read) -> Result<(), LoadError> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(LoadError::ProgramTooLarge {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }

        let start = PROGRAM_START as usize;
        self.state.memory[start..start + program.len()].copy_from_slice(&program);
        self.state.pc = PROGRAM_START;
        self.state.stack = Default::default();
        Ok(())
    }

    /// Run one fetch-decode-execute cycle.
    ///
    /// Does nothing unless the machine is `Running`. While a blocking key
    /// read is pending the cycle is consumed by the key-wait automaton
    /// instead of fetching. A fault halts the machine and is returned.
    pub fn step(&mut self) -> Result<(), Fault> {
        if self.status != Status::Running {
            return Ok(());
        }
        if self.service_key_wait() {
            return Ok(());
        }

        let op = self.fetch();
        instruction::dispatch(op)(op, self).map_err(|fault| {
            self.status = Status::Halted;
            fault
        })
    }

    /// Decrement both timers, saturating at zero.
    ///
    /// The host calls this once per 60Hz frame, independent of how many
    /// instructions it runs per frame, so timers stay rate-correct at any
    /// configured instruction clock.
    pub fn tick_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Record a key press or release from the host.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.state.keys[key as usize] = pressed;
    }

    /// The host should emit a tone while this is true.
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// A read view of the framebuffer.
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// The framebuffer, but only if it changed since the last poll.
    pub fn poll_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.frame_dirty {
            self.state.frame_dirty = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn pause(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == Status::Paused {
            self.status = Status::Running;
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Combine the two bytes at PC into an opcode and advance PC past them.
    ///
    /// PC moves before dispatch so that jump and call targets fully replace
    /// it, and conditional skips just add another instruction's width.
    fn fetch(&mut self) -> Opcode {
        let hi = self.state.memory[self.state.pc as usize % MEMORY_SIZE];
        let lo = self.state.memory[self.state.pc.wrapping_add(1) as usize % MEMORY_SIZE];
        self.state.pc = self.state.pc.wrapping_add(2);
        Opcode(u16::from(hi) << 8 | u16::from(lo))
    }

    /// Advance a pending blocking key read, consuming the cycle if one is
    /// pending.
    ///
    /// The read completes in two observations: first some key is seen
    /// pressed, then that same key is seen released. Only on release is the
    /// key's index latched into the destination register.
    fn service_key_wait(&mut self) -> bool {
        match self.state.key_wait {
            KeyWait::Idle => false,
            KeyWait::AwaitingPress { dest } => {
                if let Some(key) = self.state.keys.iter().position(|&pressed| pressed) {
                    self.state.key_wait = KeyWait::AwaitingRelease {
                        dest,
                        key: key as u8,
                    };
                }
                true
            }
            KeyWait::AwaitingRelease { dest, key } => {
                if !self.state.keys[key as usize] {
                    self.state.v[dest] = key;
                    self.state.key_wait = KeyWait::Idle;
                }
                true
            }
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
