//! # mode13h
//!
//! Drawing primitives for the 320x200, 256-color VGA mode 13h: pixels,
//! lines, rectangles, circles and ellipses over a linear one-byte-per-pixel
//! framebuffer.
//!
//! ## Layout
//!
//! - `surface`: framebuffer backends and [`PixelSurface`], which owns pixel
//!   addressing and bounds checking
//! - `draw`: the rasterizers, as methods on [`PixelSurface`]
//! - `math`: 16.16 fixed point, sign stepping and the circle [`TrigTable`]
//! - `context`: [`GraphicsContext`], a surface bundled with its trig table
//! - `graphics`: embedded-graphics `DrawTarget` support
//! - `color`: [`PaletteIndex`] and the default EGA palette indices
//! - `serial`: diagnostics over a 16550 UART
//! - `error`: [`DrawError`]
//!
//! ## Usage
//!
//! ```
//! use mode13h::{GraphicsContext, Geometry, MemoryBuffer, PaletteIndex};
//!
//! let buffer = MemoryBuffer::new(vec![0u8; 320 * 200]);
//! let mut ctx = GraphicsContext::new(buffer, Geometry::MODE_13H).unwrap();
//! ctx.draw_outlined_rectangle(10, 10, 40, 20, PaletteIndex::WHITE, PaletteIndex::BLUE).unwrap();
//! ctx.draw_circle_outline(160, 100, 30, PaletteIndex::YELLOW).unwrap();
//! assert_eq!(ctx.get_pixel(10, 10), Ok(PaletteIndex::WHITE));
//! ```
//!
//! On bare metal, map physical memory, switch the adapter to mode 13h and
//! call `surface::vga::init` to install the global `VGA` context.

#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod context;
pub mod draw;
pub mod error;
pub mod graphics;
pub mod math;
pub mod serial;
pub mod surface;

pub use color::{PaletteIndex, NUMBER_COLORS};
pub use context::GraphicsContext;
pub use error::{DrawError, DrawResult};
pub use math::{unit_step, Fixed, TrigTable};
pub use surface::{
    Framebuffer, Geometry, MemoryBuffer, PixelSurface, SCREEN_HEIGHT, SCREEN_WIDTH,
};
