//! Table-driven circles
//!
//! The walk covers one octant, from the top of the circle (`diff_x = 0`,
//! `diff_y = radius - 1`) until `diff_x` passes `diff_y` at 45 degrees, and
//! mirrors each point into the other seven. Instead of an error term, each
//! step advances a 16.16 progress value by `1 / radius` and reads the new
//! `diff_y` from the [`TrigTable`].

use crate::color::PaletteIndex;
use crate::error::DrawResult;
use crate::math::{unit_step, Fixed, TrigTable};
use crate::surface::{Framebuffer, PixelSurface};

/// Boundary offsets `(diff_x, diff_y)` of the first octant.
///
/// Each column normally contributes one pixel. When the lookup for the next
/// column falls more than one row, the current column runs down to meet it,
/// and the last column runs down to the diagonal, so the mirrored octants
/// join into one 8-connected ring.
pub(crate) struct OctantWalk<'a> {
    table: &'a TrigTable,
    radius: i32,
    step: Fixed,
    progress: Fixed,
    diff_x: i32,
    diff_y: i32,
    /// Lowest row emitted for the current column
    floor: i32,
    /// Table row of the column after this one
    next_y: i32,
}

impl<'a> OctantWalk<'a> {
    /// `radius` must be positive
    pub(crate) fn new(table: &'a TrigTable, radius: i32) -> Self {
        let mut walk = Self {
            table,
            radius,
            step: Fixed::recip(radius).unwrap_or(Fixed::ZERO),
            progress: Fixed::ZERO,
            diff_x: 0,
            diff_y: radius - 1,
            floor: 0,
            next_y: 0,
        };
        walk.plan_column();
        walk
    }

    fn plan_column(&mut self) {
        self.progress += self.step;
        self.next_y = self.table.extent(self.progress, self.radius);
        self.floor = if self.next_y < self.diff_y - 1 {
            (self.next_y + 1).max(self.diff_x + 1).min(self.diff_y)
        } else {
            self.diff_y
        };
    }
}

impl Iterator for OctantWalk<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.diff_x > self.diff_y {
            return None;
        }
        let point = (self.diff_x, self.diff_y);
        if self.diff_y > self.floor {
            self.diff_y -= 1;
        } else {
            self.diff_x += 1;
            self.diff_y = self.next_y;
            self.plan_column();
        }
        Some(point)
    }
}

impl<F: Framebuffer> PixelSurface<F> {
    pub fn draw_circle_outline(
        &mut self,
        table: &TrigTable,
        center_x: i32,
        center_y: i32,
        radius: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        let radius = radius.saturating_abs();
        if radius == 0 {
            crate::log_debug!("zero radius circle at ({}, {})", center_x, center_y);
            return self.set_pixel(center_x, center_y, color);
        }
        for (diff_x, diff_y) in OctantWalk::new(table, radius) {
            self.plot_octants(center_x, center_y, diff_x, diff_y, color)?;
        }
        Ok(())
    }

    /// Circle inscribed in the box from `(start_x, start_y)` to `(end_x, end_y)`.
    ///
    /// The radius is half the shorter side and the circle hugs the start
    /// corner; a box that is not square is reported on serial.
    pub fn draw_circle_outline_absolute(
        &mut self,
        table: &TrigTable,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        let difference_x = end_x - start_x;
        let difference_y = end_y - start_y;
        if difference_x.abs() != difference_y.abs() {
            crate::log_warn!(
                "circle box {}x{} is not square, fitting the shorter side",
                difference_x.abs(),
                difference_y.abs()
            );
        }
        let radius = difference_x.abs().min(difference_y.abs()) >> 1;
        let center_x = start_x + unit_step(difference_x) * radius;
        let center_y = start_y + unit_step(difference_y) * radius;
        self.draw_circle_outline(table, center_x, center_y, radius, color)
    }

    /// Solid disc: each octant point contributes the horizontal spans
    /// between its mirrored counterparts.
    pub fn draw_filled_circle(
        &mut self,
        table: &TrigTable,
        center_x: i32,
        center_y: i32,
        radius: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        let radius = radius.saturating_abs();
        if radius == 0 {
            return self.set_pixel(center_x, center_y, color);
        }
        for (diff_x, diff_y) in OctantWalk::new(table, radius) {
            self.draw_hline(center_x - diff_x, center_y - diff_y, 2 * diff_x, color)?;
            self.draw_hline(center_x - diff_x, center_y + diff_y, 2 * diff_x, color)?;
            self.draw_hline(center_x - diff_y, center_y - diff_x, 2 * diff_y, color)?;
            self.draw_hline(center_x - diff_y, center_y + diff_x, 2 * diff_y, color)?;
        }
        Ok(())
    }

    fn plot_octants(
        &mut self,
        center_x: i32,
        center_y: i32,
        diff_x: i32,
        diff_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.set_pixel(center_x + diff_y, center_y - diff_x, color)?; // Octant 0
        self.set_pixel(center_x + diff_x, center_y - diff_y, color)?; // Octant 1
        self.set_pixel(center_x - diff_x, center_y - diff_y, color)?; // Octant 2
        self.set_pixel(center_x - diff_y, center_y - diff_x, color)?; // Octant 3
        self.set_pixel(center_x - diff_y, center_y + diff_x, color)?; // Octant 4
        self.set_pixel(center_x - diff_x, center_y + diff_y, color)?; // Octant 5
        self.set_pixel(center_x + diff_x, center_y + diff_y, color)?; // Octant 6
        self.set_pixel(center_x + diff_y, center_y + diff_x, color) // Octant 7
    }
}
