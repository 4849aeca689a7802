use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use vip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vip8_core::FrameBuffer;

/// An RGB color triple.
pub type Rgb = (u8, u8, u8);

/// How the framebuffer should be presented: set pixels get the foreground
/// color, clear pixels the background, and every machine pixel becomes a
/// `scale` x `scale` block of window pixels.
#[derive(Clone, Copy, Debug)]
pub struct DisplayConfig {
    pub scale: usize,
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            scale: 10,
            foreground: (0x95, 0x7D, 0xAD),
            background: (0xD2, 0x91, 0xBC),
        }
    }
}

/// # Display
/// Presents the machine's 64x32 monochrome framebuffer in an SDL2 window.
///
/// The display only gets a call to `render` when the framebuffer has
/// actually changed; the window otherwise keeps showing the last frame.
pub struct Display {
    canvas: WindowCanvas,
    config: DisplayConfig,
}

impl Display {
    /// Creates a window sized to the framebuffer at the configured scale and
    /// binds a canvas to it.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `config` pixel scale and colors
    pub fn new(sdl: &sdl2::Sdl, config: DisplayConfig) -> Self {
        let video_subsystem = sdl.video().unwrap();
        let window = video_subsystem
            .window(
                "vip8",
                (DISPLAY_WIDTH * config.scale) as u32,
                (DISPLAY_HEIGHT * config.scale) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .unwrap();
        let canvas = window.into_canvas().build().unwrap();

        Display { canvas, config }
    }

    /// Flattens a framebuffer into RGB24 texture bytes.
    ///
    /// An SDL2 RGB24 texture is a 1D array of concatenated rows, three bytes
    /// per pixel; each boolean pixel maps to the foreground or background
    /// color of `config`.
    fn frame_to_texture(frame: &FrameBuffer, config: &DisplayConfig) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|&lit| {
                let (r, g, b) = if lit {
                    config.foreground
                } else {
                    config.background
                };
                [r, g, b]
            })
            .collect()
    }

    /// Formats the framebuffer as an SDL2 RGB24 texture and renders it,
    /// letting SDL scale it up to the window size.
    pub fn render(&mut self, frame: &FrameBuffer) {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .unwrap();

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_texture(frame, &self.config));
            })
            .unwrap();

        self.canvas.copy(&texture, None, None).unwrap();
        self.canvas.present()
    }
}
