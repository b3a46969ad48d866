//! Surface plus the trig table it draws circles with
//!
//! [`GraphicsContext`] is the handle most callers want: it owns a
//! [`PixelSurface`] and the [`TrigTable`] built for it, and forwards every
//! primitive so circles and ellipses need no extra argument.

use crate::color::PaletteIndex;
use crate::error::{DrawError, DrawResult};
use crate::math::TrigTable;
use crate::surface::{Framebuffer, Geometry, PixelSurface};

#[derive(Debug, Clone)]
pub struct GraphicsContext<F> {
    surface: PixelSurface<F>,
    table: TrigTable,
}

impl<F: Framebuffer> GraphicsContext<F> {
    /// Wrap `framebuffer` and build the trig table
    pub fn new(framebuffer: F, geometry: Geometry) -> Result<Self, DrawError> {
        let surface = PixelSurface::new(framebuffer, geometry)?;
        crate::log_debug!(
            "graphics context {}x{} over {} bytes",
            geometry.width,
            geometry.height,
            surface.framebuffer().len()
        );
        Ok(Self::from_parts(surface, TrigTable::build()))
    }

    /// Reuse a table that was already built
    pub fn from_parts(surface: PixelSurface<F>, table: TrigTable) -> Self {
        Self { surface, table }
    }

    pub fn surface(&self) -> &PixelSurface<F> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut PixelSurface<F> {
        &mut self.surface
    }

    pub fn table(&self) -> &TrigTable {
        &self.table
    }

    pub fn into_parts(self) -> (PixelSurface<F>, TrigTable) {
        (self.surface, self.table)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: PaletteIndex) -> DrawResult {
        self.surface.set_pixel(x, y, color)
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Result<PaletteIndex, DrawError> {
        self.surface.get_pixel(x, y)
    }

    pub fn fill_screen(&mut self, color: PaletteIndex) {
        self.surface.fill_screen(color)
    }

    pub fn draw_vline(&mut self, x: i32, y: i32, rise: i32, color: PaletteIndex) -> DrawResult {
        self.surface.draw_vline(x, y, rise, color)
    }

    pub fn draw_vline_absolute(
        &mut self,
        x: i32,
        start_y: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface.draw_vline_absolute(x, start_y, end_y, color)
    }

    pub fn draw_hline(&mut self, x: i32, y: i32, run: i32, color: PaletteIndex) -> DrawResult {
        self.surface.draw_hline(x, y, run, color)
    }

    pub fn draw_hline_absolute(
        &mut self,
        start_x: i32,
        y: i32,
        end_x: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface.draw_hline_absolute(start_x, y, end_x, color)
    }

    pub fn draw_line(
        &mut self,
        x: i32,
        y: i32,
        run: i32,
        rise: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface.draw_line(x, y, run, rise, color)
    }

    pub fn draw_line_absolute(
        &mut self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface.draw_line_absolute(start_x, start_y, end_x, end_y, color)
    }

    pub fn draw_rectangle_outline(
        &mut self,
        x: i32,
        y: i32,
        run: i32,
        rise: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface.draw_rectangle_outline(x, y, run, rise, color)
    }

    pub fn draw_rectangle_outline_absolute(
        &mut self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface
            .draw_rectangle_outline_absolute(start_x, start_y, end_x, end_y, color)
    }

    pub fn draw_filled_rectangle(
        &mut self,
        x: i32,
        y: i32,
        run: i32,
        rise: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface.draw_filled_rectangle(x, y, run, rise, color)
    }

    pub fn draw_filled_rectangle_absolute(
        &mut self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface
            .draw_filled_rectangle_absolute(start_x, start_y, end_x, end_y, color)
    }

    pub fn draw_outlined_rectangle(
        &mut self,
        x: i32,
        y: i32,
        run: i32,
        rise: i32,
        outline_color: PaletteIndex,
        fill_color: PaletteIndex,
    ) -> DrawResult {
        self.surface
            .draw_outlined_rectangle(x, y, run, rise, outline_color, fill_color)
    }

    pub fn draw_outlined_rectangle_absolute(
        &mut self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        outline_color: PaletteIndex,
        fill_color: PaletteIndex,
    ) -> DrawResult {
        self.surface.draw_outlined_rectangle_absolute(
            start_x,
            start_y,
            end_x,
            end_y,
            outline_color,
            fill_color,
        )
    }

    pub fn draw_circle_outline(
        &mut self,
        center_x: i32,
        center_y: i32,
        radius: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface
            .draw_circle_outline(&self.table, center_x, center_y, radius, color)
    }

    pub fn draw_circle_outline_absolute(
        &mut self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface
            .draw_circle_outline_absolute(&self.table, start_x, start_y, end_x, end_y, color)
    }

    pub fn draw_filled_circle(
        &mut self,
        center_x: i32,
        center_y: i32,
        radius: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface
            .draw_filled_circle(&self.table, center_x, center_y, radius, color)
    }

    pub fn draw_ellipse_outline(
        &mut self,
        center_x: i32,
        center_y: i32,
        radius_x: i32,
        radius_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface
            .draw_ellipse_outline(&self.table, center_x, center_y, radius_x, radius_y, color)
    }

    pub fn draw_filled_ellipse(
        &mut self,
        center_x: i32,
        center_y: i32,
        radius_x: i32,
        radius_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.surface
            .draw_filled_ellipse(&self.table, center_x, center_y, radius_x, radius_y, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemoryBuffer;
    use std::vec::Vec;

    fn context() -> GraphicsContext<MemoryBuffer<Vec<u8>>> {
        GraphicsContext::new(MemoryBuffer::new(std::vec![0; 64000]), Geometry::MODE_13H).unwrap()
    }

    #[test]
    fn rejects_short_buffer() {
        let result = GraphicsContext::new(MemoryBuffer::new(std::vec![0u8; 100]), Geometry::MODE_13H);
        assert!(matches!(result, Err(DrawError::BufferTooSmall { .. })));
    }

    #[test]
    fn circle_uses_owned_table() {
        let mut ctx = context();
        ctx.draw_circle_outline(160, 100, 10, PaletteIndex::WHITE).unwrap();

        let (surface, table) = ctx.into_parts();
        let mut direct = PixelSurface::new(MemoryBuffer::new(std::vec![0; 64000]), Geometry::MODE_13H).unwrap();
        direct
            .draw_circle_outline(&table, 160, 100, 10, PaletteIndex::WHITE)
            .unwrap();
        assert_eq!(surface, direct);
    }

    #[test]
    fn from_parts_shares_a_prebuilt_table() {
        let table = TrigTable::build();
        let surface = PixelSurface::new(MemoryBuffer::new(std::vec![0; 64000]), Geometry::MODE_13H).unwrap();
        let ctx = GraphicsContext::from_parts(surface, table.clone());
        assert_eq!(ctx.table(), &table);
    }

    #[test]
    fn forwards_pixel_access() {
        let mut ctx = context();
        ctx.set_pixel(3, 4, PaletteIndex::BROWN).unwrap();
        assert_eq!(ctx.get_pixel(3, 4), Ok(PaletteIndex::BROWN));
        ctx.fill_screen(PaletteIndex::BLACK);
        assert_eq!(ctx.get_pixel(3, 4), Ok(PaletteIndex::BLACK));
        ctx.surface_mut().set_pixel(0, 0, PaletteIndex::RED).unwrap();
        assert_eq!(ctx.surface().framebuffer().as_bytes()[0], 4);
    }

    #[test]
    fn filled_ellipse_through_context() {
        let mut ctx = context();
        ctx.draw_filled_ellipse(100, 100, 30, 12, PaletteIndex::LIGHT_GREEN).unwrap();
        assert_eq!(ctx.get_pixel(100, 100), Ok(PaletteIndex::LIGHT_GREEN));
        assert_eq!(ctx.get_pixel(129, 100), Ok(PaletteIndex::LIGHT_GREEN));
        assert_eq!(ctx.get_pixel(100, 113), Ok(PaletteIndex::BLACK));
    }
}
