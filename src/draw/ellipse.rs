//! Table-driven axis-aligned ellipses
//!
//! One sweep steps x across the radius and looks up y, which leaves gaps
//! where the curve is steep; a second sweep steps y and looks up x to cover
//! them. Both sweeps read the same [`TrigTable`] the circles use.

use crate::color::PaletteIndex;
use crate::error::DrawResult;
use crate::math::{Fixed, TrigTable};
use crate::surface::{Framebuffer, PixelSurface};

/// `numerator / denominator` as table progress; the denominator is non-zero
fn progress(numerator: i32, denominator: i32) -> Fixed {
    Fixed::ratio(numerator, denominator).unwrap_or(Fixed::ONE)
}

impl<F: Framebuffer> PixelSurface<F> {
    /// Ellipse with horizontal radius `radius_x` and vertical radius `radius_y`.
    ///
    /// A zero radius flattens it into the line along the other axis.
    pub fn draw_ellipse_outline(
        &mut self,
        table: &TrigTable,
        center_x: i32,
        center_y: i32,
        radius_x: i32,
        radius_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        let radius_x = radius_x.saturating_abs();
        let radius_y = radius_y.saturating_abs();
        if radius_y == 0 {
            return self.draw_hline(center_x - radius_x, center_y, 2 * radius_x, color);
        }
        if radius_x == 0 {
            return self.draw_vline(center_x, center_y - radius_y, 2 * radius_y, color);
        }

        for diff_x in 0..=radius_x {
            let diff_y = table.extent(progress(diff_x, radius_x), radius_y);
            self.plot_quadrants(center_x, center_y, diff_x, diff_y, color)?;
        }
        for diff_y in 0..=radius_y {
            let diff_x = table.extent(progress(diff_y, radius_y), radius_x);
            self.plot_quadrants(center_x, center_y, diff_x, diff_y, color)?;
        }
        Ok(())
    }

    /// Solid ellipse, one horizontal span per row
    pub fn draw_filled_ellipse(
        &mut self,
        table: &TrigTable,
        center_x: i32,
        center_y: i32,
        radius_x: i32,
        radius_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        let radius_x = radius_x.saturating_abs();
        let radius_y = radius_y.saturating_abs();
        if radius_y == 0 {
            return self.draw_hline(center_x - radius_x, center_y, 2 * radius_x, color);
        }

        for diff_y in 0..=radius_y {
            let diff_x = table.extent(progress(diff_y, radius_y), radius_x);
            self.draw_hline(center_x - diff_x, center_y - diff_y, 2 * diff_x, color)?;
            self.draw_hline(center_x - diff_x, center_y + diff_y, 2 * diff_x, color)?;
        }
        Ok(())
    }

    fn plot_quadrants(
        &mut self,
        center_x: i32,
        center_y: i32,
        diff_x: i32,
        diff_y: i32,
        color: PaletteIndex,
    ) -> DrawResult {
        self.set_pixel(center_x + diff_x, center_y - diff_y, color)?;
        self.set_pixel(center_x - diff_x, center_y - diff_y, color)?;
        self.set_pixel(center_x - diff_x, center_y + diff_y, color)?;
        self.set_pixel(center_x + diff_x, center_y + diff_y, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::testing::{painted, surface};
    use std::collections::BTreeSet;

    const C: PaletteIndex = PaletteIndex(13);

    fn normalized(x: i32, y: i32, rx: i32, ry: i32) -> f64 {
        let nx = x as f64 / rx as f64;
        let ny = y as f64 / ry as f64;
        libm::sqrt(nx * nx + ny * ny)
    }

    #[test]
    fn outline_hits_the_axis_extremes() {
        let table = TrigTable::build();
        let mut s = surface();
        s.draw_ellipse_outline(&table, 100, 100, 20, 10, C).unwrap();
        let points = painted(&s);
        for p in [(80, 100), (120, 100), (100, 90), (100, 110)] {
            assert!(points.contains(&p), "{:?} missing", p);
        }
    }

    #[test]
    fn outline_hugs_the_curve() {
        let table = TrigTable::build();
        let mut s = surface();
        s.draw_ellipse_outline(&table, 100, 100, 20, 10, C).unwrap();
        for &(x, y) in &painted(&s) {
            let r = normalized(x - 100, y - 100, 20, 10);
            assert!((0.85..=1.05).contains(&r), "({}, {}) at {}", x, y, r);
        }
    }

    #[test]
    fn outline_is_mirrored_across_both_axes() {
        let table = TrigTable::build();
        let mut s = surface();
        s.draw_ellipse_outline(&table, 160, 100, 45, 17, C).unwrap();
        let points: BTreeSet<_> = painted(&s).iter().map(|&(x, y)| (x - 160, y - 100)).collect();
        for &(x, y) in &points {
            assert!(points.contains(&(-x, y)));
            assert!(points.contains(&(x, -y)));
        }
    }

    #[test]
    fn zero_radius_flattens_to_a_line() {
        let table = TrigTable::build();
        let mut s = surface();
        s.draw_ellipse_outline(&table, 50, 50, 6, 0, C).unwrap();
        let expected: BTreeSet<_> = (44..=56).map(|x| (x, 50)).collect();
        assert_eq!(painted(&s), expected);

        let mut s = surface();
        s.draw_ellipse_outline(&table, 50, 50, 0, 3, C).unwrap();
        let expected: BTreeSet<_> = (47..=53).map(|y| (50, y)).collect();
        assert_eq!(painted(&s), expected);
    }

    #[test]
    fn filled_ellipse_is_solid_and_bounded() {
        let table = TrigTable::build();
        let mut s = surface();
        s.draw_filled_ellipse(&table, 100, 100, 20, 10, C).unwrap();
        let points = painted(&s);
        for x in -20..=20 {
            for y in -10..=10 {
                let r = normalized(x, y, 20, 10);
                if r <= 0.85 {
                    assert!(points.contains(&(100 + x, 100 + y)), "hole at ({}, {})", x, y);
                }
            }
        }
        assert!(points.iter().all(|&(x, y)| normalized(x - 100, y - 100, 20, 10) <= 1.05));
    }

    #[test]
    fn filled_ellipse_with_negative_radii() {
        let table = TrigTable::build();
        let mut a = surface();
        a.draw_filled_ellipse(&table, 60, 60, -12, -7, C).unwrap();
        let mut b = surface();
        b.draw_filled_ellipse(&table, 60, 60, 12, 7, C).unwrap();
        assert_eq!(painted(&a), painted(&b));
        assert!(!painted(&a).is_empty());
    }
}
