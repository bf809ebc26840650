//! Read-only view turning an [EncodingBuffer] into a stream of narrow units
//! for whatever draws the barcode.

use core::iter;

use crate::buffer::EncodingBuffer;

#[derive(Debug, Clone)]
pub struct BarcodeRender<'a> {
    buffer: &'a EncodingBuffer,
    scale: u16,
    quiet_zone: u16,
    height: u32,
    inverted: bool,
}

impl<'a> BarcodeRender<'a> {
    pub const fn new(buffer: &'a EncodingBuffer) -> Self {
        Self { buffer, scale: 1, quiet_zone: 0, height: 1, inverted: false }
    }

    /// Width in pixels, quiet zones included.
    pub fn width(&self) -> u32 {
        (self.buffer.min_width() + 2 * self.quiet_zone as u32) * self.scale as u32
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per narrow unit.
    #[inline]
    pub const fn scale(&self) -> u16 {
        self.scale
    }

    pub const fn set_scale(mut self, scale: u16) -> Self {
        self.scale = if scale == 0 { 1 } else { scale };
        self
    }

    /// Blank margin on each side, in narrow units.
    #[inline]
    pub const fn quiet_zone(&self) -> u16 {
        self.quiet_zone
    }

    pub const fn set_quiet_zone(mut self, quiet_zone: u16) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Bar height in pixels, only used when drawing.
    pub const fn set_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    #[inline]
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    pub const fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// One item per pixel of a single row, `true` for bars.
    pub fn bits(&self) -> impl Iterator<Item = bool> + 'a {
        let quiet = iter::repeat(false).take(self.quiet_zone as usize);
        let (sx, invert) = (self.scale as usize, self.inverted);
        quiet.clone()
            .chain(self.buffer.bits())
            .chain(quiet)
            .flat_map(move |bit| iter::repeat(bit ^ invert).take(sx))
    }

    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        for (i, bit) in self.bits().enumerate() {
            target[i] = if bit { on.clone() } else { off.clone() };
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }

    /// Packs one row into `target`, most significant bit first.
    pub fn fill_bitmap(&self, target: &mut [u8]) {
        for (i, bit) in self.bits().enumerate() {
            if bit {
                target[i / 8] |= 0x80 >> (i % 8);
            }
        }
    }
}

#[cfg(feature = "embedded-graphics")]
mod graphics {
    use embedded_graphics::draw_target::DrawTarget;
    use embedded_graphics::geometry::{Point, Size};
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::primitives::Rectangle;
    use embedded_graphics::Drawable;

    use super::BarcodeRender;

    impl Drawable for BarcodeRender<'_> {
        type Color = BinaryColor;
        type Output = ();

        fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
        where
            D: DrawTarget<Color = Self::Color>,
        {
            let (on, off) = if self.inverted {
                (BinaryColor::Off, BinaryColor::On)
            } else {
                (BinaryColor::On, BinaryColor::Off)
            };
            let scale = self.scale as u32;

            target.fill_solid(&Rectangle::new(Point::zero(), Size::new(self.width(), self.height)), off)?;

            let mut x = self.quiet_zone as u32 * scale;
            for symbol in self.buffer {
                for module in symbol.pattern {
                    let width = module.width as u32 * scale;
                    if module.kind.is_bar() {
                        let area = Rectangle::new(Point::new(x as i32, 0), Size::new(width, self.height));
                        target.fill_solid(&area, on)?;
                    }
                    x += width;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::SymbolKind;
    use crate::pattern::{ModuleKind, Pattern};
    use pretty_assertions::assert_eq;

    fn buffer() -> EncodingBuffer {
        let mut buffer = EncodingBuffer::new();
        buffer.push("", SymbolKind::Hidden, Pattern::from_digits("111", ModuleKind::Bar));
        buffer.push("0", SymbolKind::Data, Pattern::from_digits("3211", ModuleKind::Space));
        buffer
    }

    #[test]
    fn test_width() {
        let buffer = buffer();
        let render = BarcodeRender::new(&buffer).set_scale(2).set_quiet_zone(3);
        assert_eq!(render.width(), (10 + 6) * 2);
        assert_eq!(render.bits().count() as u32, render.width());
    }

    #[test]
    fn test_bits_scaled_and_inverted() {
        let buffer = buffer();
        let bits: Vec<bool> = BarcodeRender::new(&buffer).set_scale(2).bits().take(4).collect();
        assert_eq!(bits, [true, true, false, false]);

        let bits: Vec<bool> = BarcodeRender::new(&buffer).set_quiet_zone(1).set_inverted(true).bits().take(3).collect();
        assert_eq!(bits, [true, false, true]);
    }

    #[test]
    fn test_fill_bits() {
        let buffer = buffer();
        let mut target = [false; 10];
        BarcodeRender::new(&buffer).fill_bits(&mut target);
        assert_eq!(target, [true, false, true, false, false, false, true, true, false, true]);
    }

    #[test]
    fn test_fill_bitmap() {
        let buffer = buffer();
        let mut target = [0u8; 2];
        BarcodeRender::new(&buffer).fill_bitmap(&mut target);
        assert_eq!(target, [0b1010_0011, 0b0100_0000]);
    }

    #[cfg(feature = "embedded-graphics")]
    #[test]
    fn test_draw() {
        use embedded_graphics::geometry::{OriginDimensions, Size};
        use embedded_graphics::pixelcolor::BinaryColor;
        use embedded_graphics::prelude::*;
        use embedded_graphics::Pixel;

        struct Canvas {
            width: u32,
            height: u32,
            pixels: Vec<bool>,
        }

        impl OriginDimensions for Canvas {
            fn size(&self) -> Size {
                Size::new(self.width, self.height)
            }
        }

        impl DrawTarget for Canvas {
            type Color = BinaryColor;
            type Error = core::convert::Infallible;

            fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
            where
                I: IntoIterator<Item = Pixel<Self::Color>>,
            {
                for Pixel(point, color) in pixels {
                    if point.x >= 0 && point.y >= 0 && (point.x as u32) < self.width && (point.y as u32) < self.height {
                        self.pixels[point.y as usize * self.width as usize + point.x as usize] = color.is_on();
                    }
                }
                Ok(())
            }
        }

        let buffer = buffer();
        let render = BarcodeRender::new(&buffer).set_quiet_zone(1).set_height(2);
        let mut canvas = Canvas { width: render.width(), height: 2, pixels: vec![true; 24] };
        render.draw(&mut canvas).unwrap();

        let row: Vec<bool> = render.bits().collect();
        assert_eq!(&canvas.pixels[..12], row.as_slice());
        assert_eq!(&canvas.pixels[12..], row.as_slice());
    }
}
