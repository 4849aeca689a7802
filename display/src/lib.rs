pub use display::{Display, DisplayConfig, Rgb};

mod display;
