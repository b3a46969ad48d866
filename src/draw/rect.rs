//! Rectangles composed from lines
use crate::color::PaletteIndex;
use crate::error::DrawResult;
use crate::math::unit_step;
use crate::surface::{Framebuffer, PixelSurface};

impl<F: Framebuffer> PixelSurface<F> {
    /// Border of the box spanning `(x, y)` to `(x + run, y + rise)`
    pub fn draw_rectangle_outline(
        &mut self,
        x: i32,
        y: i32,
        run: i32,
        rise: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.draw_hline(x, y, run, color)?;
        self.draw_hline(x, y + rise, run, color)?;

        self.draw_vline(x, y, rise, color)?;
        self.draw_vline(x + run, y, rise, color)
    }

    pub fn draw_rectangle_outline_absolute(
        &mut self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.draw_rectangle_outline(start_x, start_y, end_x - start_x, end_y - start_y, color)
    }

    /// Solid box, one vertical line per column from `x` to `x + run`
    pub fn draw_filled_rectangle(
        &mut self,
        x: i32,
        y: i32,
        run: i32,
        rise: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.draw_vline(x, y, rise, color)?;
        let step = unit_step(run);
        let mut i = run;
        while i != 0 {
            self.draw_vline(x + i, y, rise, color)?;
            i -= step;
        }
        Ok(())
    }

    pub fn draw_filled_rectangle_absolute(
        &mut self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.draw_filled_rectangle(start_x, start_y, end_x - start_x, end_y - start_y, color)
    }

    /// Outline in `outline_color` around a fill in `fill_color`.
    ///
    /// The fill is inset one pixel on every side. When an extent is shorter
    /// than 2 the inset collapses onto the border and the fill overwrites it
    /// there; it never reaches outside the outline.
    pub fn draw_outlined_rectangle(
        &mut self,
        x: i32,
        y: i32,
        run: i32,
        rise: i32,
        outline_color: PaletteIndex,
        fill_color: PaletteIndex,
    ) -> DrawResult {
        let x_offset = unit_step(run);
        let y_offset = unit_step(rise);
        self.draw_rectangle_outline(x, y, run, rise, outline_color)?;
        self.draw_filled_rectangle(
            x + x_offset,
            y + y_offset,
            run - 2 * x_offset,
            rise - 2 * y_offset,
            fill_color,
        )
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
        self.draw_outlined_rectangle(
            start_x,
            start_y,
            end_x - start_x,
            end_y - start_y,
            outline_color,
            fill_color,
        )
    }
}
