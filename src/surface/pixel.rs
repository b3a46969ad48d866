//! Pixel addressing over a linear framebuffer
use super::{Framebuffer, Geometry, SCREEN_WIDTH};
use crate::color::PaletteIndex;
use crate::error::{DrawError, DrawResult};

/// Coordinates are validated before every access in debug builds and with
/// the `bounds-check` feature. Otherwise an off-surface coordinate lands
/// wherever `y * width + x` points (the backend drops offsets outside the
/// buffer), so callers clip first.
const BOUNDS_CHECKED: bool = cfg!(any(debug_assertions, feature = "bounds-check"));

/// The only thing in the crate that reads or writes framebuffer bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface<F> {
    framebuffer: F,
    geometry: Geometry,
}

impl<F: Framebuffer> PixelSurface<F> {
    pub fn new(framebuffer: F, geometry: Geometry) -> Result<Self, DrawError> {
        if geometry.width == 0 || geometry.height == 0 {
            return Err(DrawError::InvalidGeometry);
        }
        let required = geometry.pixel_count();
        if framebuffer.len() < required {
            return Err(DrawError::BufferTooSmall {
                required,
                available: framebuffer.len(),
            });
        }
        Ok(Self { framebuffer, geometry })
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn width(&self) -> usize {
        self.geometry.width
    }

    pub fn height(&self) -> usize {
        self.geometry.height
    }

    pub fn framebuffer(&self) -> &F {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut F {
        &mut self.framebuffer
    }

    pub fn into_framebuffer(self) -> F {
        self.framebuffer
    }

    /// Byte offset of `(x, y)`.
    ///
    /// At 320 pixels per row `y * 320` is computed as `(y << 8) + (y << 6)`,
    /// since 320 = 256 + 64. Other widths multiply.
    #[inline]
    pub fn address(&self, x: i32, y: i32) -> isize {
        let (x, y) = (x as isize, y as isize);
        if self.geometry.width == SCREEN_WIDTH {
            (y << 8) + (y << 6) + x
        } else {
            y * self.geometry.width as isize + x
        }
    }

    #[inline]
    fn check(&self, x: i32, y: i32) -> DrawResult {
        if BOUNDS_CHECKED && !self.geometry.contains(x, y) {
            crate::log_error!(
                "pixel out of bounds: ({}, {}) on {}x{}",
                x,
                y,
                self.geometry.width,
                self.geometry.height
            );
            return Err(DrawError::OutOfBounds {
                x,
                y,
                width: self.geometry.width,
                height: self.geometry.height,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: PaletteIndex) -> DrawResult {
        self.check(x, y)?;
        self.put(x, y, color);
        Ok(())
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Result<PaletteIndex, DrawError> {
        self.check(x, y)?;
        Ok(PaletteIndex(self.framebuffer.read(self.address(x, y) as usize)))
    }

    /// Paint every pixel of the surface
    pub fn fill_screen(&mut self, color: PaletteIndex) {
        let count = self.geometry.pixel_count();
        if self.framebuffer.len() == count {
            self.framebuffer.fill(color.0);
        } else {
            for offset in 0..count {
                self.framebuffer.write(offset, color.0);
            }
        }
    }

    /// Write without the bounds check; callers have already clipped
    #[inline]
    pub(crate) fn put(&mut self, x: i32, y: i32, color: PaletteIndex) {
        let offset = self.address(x, y) as usize;
        self.framebuffer.write(offset, color.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemoryBuffer;
    use std::vec::Vec;

    fn mode13h() -> PixelSurface<MemoryBuffer<Vec<u8>>> {
        PixelSurface::new(MemoryBuffer::new(std::vec![0; 64000]), Geometry::MODE_13H).unwrap()
    }

    #[test]
    fn shift_address_matches_multiply() {
        let surface = mode13h();
        for (x, y) in [(0, 0), (319, 0), (0, 1), (17, 123), (319, 199)] {
            assert_eq!(surface.address(x, y), (y * 320 + x) as isize);
        }
    }

    #[test]
    fn other_widths_multiply() {
        let surface =
            PixelSurface::new(MemoryBuffer::new(std::vec![0; 100 * 10]), Geometry::new(100, 10)).unwrap();
        assert_eq!(surface.address(5, 3), 305);
    }

    #[test]
    fn set_then_get_returns_color() {
        let mut surface = mode13h();
        surface.set_pixel(319, 199, PaletteIndex(42)).unwrap();
        assert_eq!(surface.get_pixel(319, 199), Ok(PaletteIndex(42)));
        assert_eq!(surface.framebuffer().as_bytes()[63999], 42);
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "bounds-check"))]
    fn rejects_out_of_bounds_without_writing() {
        let mut surface = mode13h();
        let err = surface.set_pixel(320, 0, PaletteIndex::WHITE).unwrap_err();
        assert_eq!(err, DrawError::OutOfBounds { x: 320, y: 0, width: 320, height: 200 });
        assert!(surface.get_pixel(-1, 5).is_err());
        assert!(surface.framebuffer().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "bounds-check"))]
    fn out_of_bounds_is_reported_on_serial() {
        let mut surface = mode13h();
        let before = crate::serial::diagnostics_emitted();
        let _ = surface.set_pixel(0, 200, PaletteIndex::RED);
        assert!(crate::serial::diagnostics_emitted() > before);
    }

    #[test]
    fn construction_validates_buffer() {
        let small = PixelSurface::new(MemoryBuffer::new(std::vec![0; 10]), Geometry::MODE_13H);
        assert_eq!(
            small.unwrap_err(),
            DrawError::BufferTooSmall { required: 64000, available: 10 }
        );
        let empty = PixelSurface::new(MemoryBuffer::new(std::vec![0; 10]), Geometry::new(0, 10));
        assert_eq!(empty.unwrap_err(), DrawError::InvalidGeometry);
    }

    #[test]
    fn fill_screen_paints_everything() {
        let mut surface = mode13h();
        surface.fill_screen(PaletteIndex::BLUE);
        assert!(surface.framebuffer().as_bytes().iter().all(|&b| b == 1));
    }
}
