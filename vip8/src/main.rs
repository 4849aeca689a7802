use std::path::PathBuf;

mod keymap;
mod run;

fn main() {
    let rom = std::env::args()
        .nth(1)
        .expect("expected a ROM file path but got no arguments");
    run::run(PathBuf::from(rom));
}
