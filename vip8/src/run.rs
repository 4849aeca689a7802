use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use vip8_core::constants::{FRAME_RATE, STEPS_PER_FRAME};
use vip8_core::{Machine, Status};
use vip8_display::{Display, DisplayConfig};

use crate::keymap::keymap;

/// Drive a machine at 60 frames per second until the window is closed.
///
/// Each frame: poll input into the machine's key latch, run the frame's
/// share of instructions, tick the timers once, and render the framebuffer
/// if it changed.
pub fn run(rom: PathBuf) {
    let mut machine = Machine::new();

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().unwrap();
    let mut display = Display::new(&sdl, DisplayConfig::default());
    let mut events = sdl.event_pump().unwrap();

    // Load ROM
    let file = File::open(&rom).expect("unable to open ROM file");
    let mut reader = BufReader::new(file);
    match machine.load(&mut reader) {
        Ok(()) => println!("loaded {}", rom.display()),
        Err(e) => {
            eprintln!("could not load {}: {}", rom.display(), e);
            return;
        }
    }

    let frame_time: Duration = Duration::from_secs(1) / FRAME_RATE;

    'frame: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'frame,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => machine.set_key(kc, true),
                    (Keycode::Escape, _) => break 'frame,
                    (Keycode::Space, _) => match machine.status() {
                        Status::Paused => machine.resume(),
                        _ => machine.pause(),
                    },
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match keymap(key) {
                    Some(kc) => machine.set_key(kc, false),
                    None => continue,
                },
                _ => continue,
            };
        }

        // Run this frame's share of instructions, then tick the timers once
        for _ in 0..STEPS_PER_FRAME {
            if let Err(fault) = machine.step() {
                eprintln!("machine halted: {}", fault);
                break;
            }
        }
        machine.tick_timers();

        if let Some(frame) = machine.poll_frame() {
            display.render(frame);
        }

        // Sleep off the rest of the frame
        let elapsed = frame_start.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }
}
