//! embedded-graphics integration
//!
//! Any [`PixelSurface`] is a [`DrawTarget`] for [`PaletteIndex`] colors, so
//! fonts, styled primitives and images from the embedded-graphics ecosystem
//! render into the same buffer as the native rasterizers. Unlike the native
//! primitives, pixels off the surface are clipped silently.

use core::convert::Infallible;

use embedded_graphics::{
    prelude::{DrawTarget, OriginDimensions, Point, Size},
    Pixel,
};

use crate::color::PaletteIndex;
use crate::surface::{Framebuffer, PixelSurface};

impl<F: Framebuffer> DrawTarget for PixelSurface<F> {
    type Color = PaletteIndex;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let geometry = self.geometry();
        for Pixel(Point { x, y }, color) in pixels {
            if !geometry.contains(x, y) {
                continue;
            }
            self.put(x, y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color);
        Ok(())
    }
}

impl<F: Framebuffer> OriginDimensions for PixelSurface<F> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::testing::{painted, pixels_of, surface};
    use embedded_graphics::{
        mono_font::{ascii::FONT_6X10, MonoTextStyle},
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
        text::Text,
    };
    use std::collections::BTreeSet;

    #[test]
    fn reports_surface_size() {
        let s = surface();
        assert_eq!(s.size(), Size::new(320, 200));
        assert_eq!(s.bounding_box().top_left, Point::zero());
    }

    #[test]
    fn styled_rectangle_fills_its_area() {
        let mut s = surface();
        Rectangle::new(Point::new(10, 20), Size::new(5, 3))
            .into_styled(PrimitiveStyle::with_fill(PaletteIndex::RED))
            .draw(&mut s)
            .unwrap();
        let expected: BTreeSet<_> = (10..15).flat_map(|x| (20..23).map(move |y| (x, y))).collect();
        assert_eq!(pixels_of(&s, PaletteIndex::RED), expected);
    }

    #[test]
    fn pixels_off_the_surface_are_clipped() {
        let mut s = surface();
        Line::new(Point::new(300, 5), Point::new(340, 5))
            .into_styled(PrimitiveStyle::with_stroke(PaletteIndex::GREEN, 1))
            .draw(&mut s)
            .unwrap();
        let expected: BTreeSet<_> = (300..320).map(|x| (x, 5)).collect();
        assert_eq!(painted(&s), expected);
    }

    #[test]
    fn text_renders_in_palette_color() {
        let mut s = surface();
        let style = MonoTextStyle::new(&FONT_6X10, PaletteIndex::WHITE);
        Text::new("Hi", Point::new(2, 10), style).draw(&mut s).unwrap();
        let lit = pixels_of(&s, PaletteIndex::WHITE);
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&(x, y)| (2..14).contains(&x) && (0..=12).contains(&y)));
        assert_eq!(painted(&s), lit);
    }

    #[test]
    fn clear_fills_the_screen() {
        let mut s = surface();
        DrawTarget::clear(&mut s, PaletteIndex::MAGENTA).unwrap();
        assert_eq!(pixels_of(&s, PaletteIndex::MAGENTA).len(), 64000);
    }

    #[test]
    fn mixes_with_native_primitives() {
        let mut s = surface();
        s.draw_hline(0, 0, 9, PaletteIndex::BLUE).unwrap();
        Pixel(Point::new(4, 0), PaletteIndex::CYAN).draw(&mut s).unwrap();
        assert_eq!(s.get_pixel(4, 0), Ok(PaletteIndex::CYAN));
        assert_eq!(s.get_pixel(5, 0), Ok(PaletteIndex::BLUE));
    }
}
