pub mod image_helper {
    use crate::error::Result;
    use image::{DynamicImage, ImageEncoder, RgbImage};
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::Path;

    /// Decodes any format the `image` crate recognizes.
    pub fn load(path: impl AsRef<Path>) -> Result<DynamicImage> {
        Ok(image::open(path)?)
    }

    /// Writes an RGB buffer as PNG.
    pub fn save_rgb(path: impl AsRef<Path>, image: &RgbImage) -> Result<()> {
        let output = BufWriter::new(File::create(path)?);
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )?;

        Ok(())
    }
}
