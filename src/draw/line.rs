//! Straight lines
use crate::color::PaletteIndex;
use crate::error::DrawResult;
use crate::math::unit_step;
use crate::surface::{Framebuffer, PixelSurface};

impl<F: Framebuffer> PixelSurface<F> {
    /// Vertical line from `(x, y)` to `(x, y + rise)`
    pub fn draw_vline(&mut self, x: i32, y: i32, rise: i32, color: PaletteIndex) -> DrawResult {
        self.set_pixel(x, y, color)?;
        let step = unit_step(rise);
        let mut i = rise;
        while i != 0 {
            self.set_pixel(x, y + i, color)?;
            i -= step;
        }
        Ok(())
    }

    pub fn draw_vline_absolute(
        &mut self,
        x: i32,
        start_y: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.draw_vline(x, start_y, end_y - start_y, color)
    }

    /// Horizontal line from `(x, y)` to `(x + run, y)`
    pub fn draw_hline(&mut self, x: i32, y: i32, run: i32, color: PaletteIndex) -> DrawResult {
        self.set_pixel(x, y, color)?;
        let step = unit_step(run);
        let mut i = run;
        while i != 0 {
            self.set_pixel(x + i, y, color)?;
            i -= step;
        }
        Ok(())
    }

    pub fn draw_hline_absolute(
        &mut self,
        start_x: i32,
        y: i32,
        end_x: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.draw_hline(start_x, y, end_x - start_x, color)
    }

    /// Bresenham line from `(x, y)` to `(x + run, y + rise)`.
    ///
    /// Exactly one pixel per step along the major axis, `max(|run|, |rise|) + 1`
    /// pixels in total. Ties go to the horizontal axis.
    pub fn draw_line(
        &mut self,
        x: i32,
        y: i32,
        run: i32,
        rise: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        let abs_run = run.abs();
        let abs_rise = rise.abs();
        let run_sign = unit_step(run);
        let rise_sign = unit_step(rise);
        let (mut px, mut py) = (x, y);

        self.set_pixel(px, py, color)?;

        if abs_run >= abs_rise {
            let mut error = abs_run >> 1;
            for _ in 0..abs_run {
                error += abs_rise;
                if error >= abs_run {
                    error -= abs_run;
                    py += rise_sign;
                }
                px += run_sign;
                self.set_pixel(px, py, color)?;
            }
        } else {
            let mut error = abs_rise >> 1;
            for _ in 0..abs_rise {
                error += abs_run;
                if error >= abs_rise {
                    error -= abs_rise;
                    px += run_sign;
                }
                py += rise_sign;
                self.set_pixel(px, py, color)?;
            }
        }
        Ok(())
    }

    pub fn draw_line_absolute(
        &mut self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.draw_line(start_x, start_y, end_x - start_x, end_y - start_y, color)
    }
}
