// THEORY:
// `PixelSource` is the seam between the counter and whatever decoded the image.
// The core never touches files or codecs; it only asks for the dimensions and for
// one RGB sample at a time. Adapters for the `image` crate's buffers live here so
// that the common case needs no glue at all.

use crate::core_modules::pixel::pixel::{CHANNEL_MAX_8BIT, Channel, ColorSample, Coordinate};
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb, RgbImage};

/// Read-only access to a rectangular grid of RGB samples.
///
/// Implementations must return the same values for the duration of a count.
pub trait PixelSource {
    fn width(&self) -> Coordinate;
    fn height(&self) -> Coordinate;
    /// The sample at `(x, y)`. Only called with in-bounds coordinates.
    fn color_at(&self, x: Coordinate, y: Coordinate) -> ColorSample;
    /// The largest value a channel may take.
    fn channel_max(&self) -> Channel {
        CHANNEL_MAX_8BIT
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn width(&self) -> Coordinate {
        (**self).width()
    }

    fn height(&self) -> Coordinate {
        (**self).height()
    }

    fn color_at(&self, x: Coordinate, y: Coordinate) -> ColorSample {
        (**self).color_at(x, y)
    }

    fn channel_max(&self) -> Channel {
        (**self).channel_max()
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> Coordinate {
        ImageBuffer::width(self)
    }

    fn height(&self) -> Coordinate {
        ImageBuffer::height(self)
    }

    fn color_at(&self, x: Coordinate, y: Coordinate) -> ColorSample {
        ColorSample::from(self.get_pixel(x, y).0)
    }
}

impl PixelSource for ImageBuffer<Rgb<u16>, Vec<u16>> {
    fn width(&self) -> Coordinate {
        ImageBuffer::width(self)
    }

    fn height(&self) -> Coordinate {
        ImageBuffer::height(self)
    }

    fn color_at(&self, x: Coordinate, y: Coordinate) -> ColorSample {
        ColorSample::from(self.get_pixel(x, y).0)
    }

    fn channel_max(&self) -> Channel {
        u16::MAX
    }
}

/// Alpha is ignored; every pixel is read through its 8-bit RGBA view.
impl PixelSource for DynamicImage {
    fn width(&self) -> Coordinate {
        GenericImageView::width(self)
    }

    fn height(&self) -> Coordinate {
        GenericImageView::height(self)
    }

    fn color_at(&self, x: Coordinate, y: Coordinate) -> ColorSample {
        let [red, green, blue, _alpha] = self.get_pixel(x, y).0;
        ColorSample::from([red, green, blue])
    }
}


#[cfg(test)]
mod tests {
    use super::testing::AsciiSource;
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn rgb_image_reports_its_samples() {
        let mut img = RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]));
        img.put_pixel(2, 1, Rgb([1, 2, 3]));

        assert_eq!(PixelSource::width(&img), 3);
        assert_eq!(PixelSource::height(&img), 2);
        assert_eq!(img.color_at(2, 1), ColorSample::new(1, 2, 3));
        assert_eq!(PixelSource::channel_max(&img), 255);
    }

    #[test]
    fn rgb16_image_declares_full_range() {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::from_pixel(1, 1, Rgb([40_000, 0, 65_535]));
        assert_eq!(PixelSource::channel_max(&img), u16::MAX);
        assert_eq!(img.color_at(0, 0), ColorSample::new(40_000, 0, 65_535));
    }

    #[test]
    fn dynamic_image_drops_alpha() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let img = DynamicImage::ImageRgba8(rgba);
        assert_eq!(PixelSource::width(&img), 2);
        assert_eq!(img.color_at(1, 1), ColorSample::new(10, 20, 30));
    }

    #[test]
    fn ascii_source_maps_hash_to_black() {
        let source = AsciiSource::new(
            "
            .#
            ..
            ",
        );
        assert_eq!(source.width(), 2);
        assert_eq!(source.height(), 2);
        assert_eq!(source.color_at(1, 0), ColorSample::new(0, 0, 0));
        assert_eq!(source.color_at(0, 1), ColorSample::new(255, 255, 255));
    }
}
