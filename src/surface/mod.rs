//! # Surface Module
//!
//! Everything between the drawing primitives and raw video memory.
//!
//! ## Modules
//!
//! - `memory`: `MemoryBuffer`, a framebuffer backed by an ordinary byte buffer
//! - `vga`: `VgaMemory`, the memory-mapped mode 13h window at `0xA0000`
//!   (x86_64 only), plus the global `VGA` context slot
//! - `pixel`: `PixelSurface`, pixel addressing and the single point of
//!   contact with a framebuffer
//!
//! ## Framebuffer Capability
//!
//! Primitives never see where the bytes live. A backend only has to expose
//! its length and byte-wise `read`/`write` through [`Framebuffer`]. Offsets
//! past the end must be ignored on write and read back as zero, so a backend
//! never touches memory it does not own.

pub mod memory;
pub mod pixel;
#[cfg(target_arch = "x86_64")]
pub mod vga;

pub use memory::MemoryBuffer;
pub use pixel::PixelSurface;

/// Mode 13h width in pixels
pub const SCREEN_WIDTH: usize = 320;
/// Mode 13h height in pixels
pub const SCREEN_HEIGHT: usize = 200;

/// Linear, one-byte-per-pixel video memory
pub trait Framebuffer {
    fn len(&self) -> usize;

    fn read(&self, offset: usize) -> u8;

    fn write(&mut self, offset: usize, value: u8);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fill(&mut self, value: u8) {
        for offset in 0..self.len() {
            self.write(offset, value);
        }
    }
}

/// Raster dimensions of a surface, row-major with the origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
}

impl Geometry {
    pub const MODE_13H: Geometry = Geometry::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::MODE_13H
    }
}
