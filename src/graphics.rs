//! [embedded_graphics] support: a [PixelGrid] or a [Symbol] can be drawn on
//! any binary [DrawTarget], dark modules as [BinaryColor::On].

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::builder::Symbol;
use crate::canvas::PixelGrid;

impl OriginDimensions for PixelGrid {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl Drawable for PixelGrid {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let area = Rectangle::new(Point::zero(), self.size());
        let colors = (0..self.height())
            .flat_map(|y| (0..self.width()).map(move |x| (x, y)))
            .map(|(x, y)| BinaryColor::from(self.get(x, y)));

        target.fill_contiguous(&area, colors)
    }
}

impl OriginDimensions for Symbol {
    fn size(&self) -> Size {
        self.grid().size()
    }
}

impl Drawable for Symbol {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.grid().draw(target)
    }
}
