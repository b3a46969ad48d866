//! Error types shared by every drawing primitive
use core::fmt;

/// Failure reported by a surface or a drawing primitive.
///
/// Only `OutOfBounds` can happen while drawing, and only when the
/// per-pixel check is compiled in (debug builds or the `bounds-check`
/// feature). The other variants come from surface construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    BufferTooSmall {
        required: usize,
        available: usize,
    },
    InvalidGeometry,
}

pub type DrawResult = Result<(), DrawError>;

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::OutOfBounds { x, y, width, height } => write!(
                f,
                "pixel ({}, {}) out of bounds for {}x{} surface",
                x, y, width, height
            ),
            DrawError::BufferTooSmall { required, available } => write!(
                f,
                "framebuffer holds {} bytes, surface needs {}",
                available, required
            ),
            DrawError::InvalidGeometry => write!(f, "surface width and height must be non-zero"),
        }
    }
}
