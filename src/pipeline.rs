// THEORY:
// The `pipeline` module is the top-level API of the counter. It strings the core stages
// together: PixelSource -> Binarizer -> BinarizedGrid -> ComponentScanner ->
// SilhouetteFilter -> count.
//
// `SilhouetteCounter::count` is a pure function of the source snapshot: it builds a
// fresh grid on every call, owns it for the duration of the scan and drops it before
// returning. Nothing is logged and nothing is cached, so counting the same source twice
// gives the same answer. File loading and logging live in `count_silhouettes_in_file`,
// outside the pure path.

use crate::core_modules::binarized_grid::BinarizedGrid;
use crate::core_modules::binarizer::{Binarizer, DEFAULT_DARK_THRESHOLD};
use crate::core_modules::component_scanner::component_scanner;
use crate::core_modules::pixel::pixel::Coordinate;
use crate::core_modules::pixel_source::PixelSource;
use crate::core_modules::silhouette_filter::SilhouetteFilter;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::Result;
use std::path::Path;

/// Configuration for the `SilhouetteCounter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    /// A pixel is dark only when every channel, scaled to 0-255, is at or below this value.
    pub dark_threshold: u8,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            dark_threshold: DEFAULT_DARK_THRESHOLD,
        }
    }
}

/// Everything the counter learned about one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountReport {
    pub width: Coordinate,
    pub height: Coordinate,
    /// Pixel count of every discovered component, in discovery order.
    pub component_sizes: Vec<usize>,
    /// Minimum size a component needed to be counted. `None` if nothing was found.
    pub size_threshold: Option<usize>,
    /// Components that passed the size filter.
    pub silhouettes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SilhouetteCounter {
    config: CounterConfig,
}

impl SilhouetteCounter {
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Counts the silhouettes in `source`.
    pub fn count<S: PixelSource + ?Sized>(&self, source: &S) -> Result<usize> {
        self.report(source).map(|report| report.silhouettes)
    }

    /// Counts the silhouettes in `source` and keeps the intermediate results.
    pub fn report<S: PixelSource + ?Sized>(&self, source: &S) -> Result<CountReport> {
        let binarizer = Binarizer::new(self.config.dark_threshold);
        let mut grid = BinarizedGrid::build(source, &binarizer)?;
        let component_sizes = component_scanner::scan_components(&mut grid);

        Ok(CountReport {
            width: grid.width(),
            height: grid.height(),
            size_threshold: SilhouetteFilter::size_threshold(&component_sizes),
            silhouettes: SilhouetteFilter::count(&component_sizes),
            component_sizes,
        })
    }
}

/// Counts the silhouettes in `source` with the default configuration.
pub fn count_silhouettes<S: PixelSource + ?Sized>(source: &S) -> Result<usize> {
    SilhouetteCounter::default().count(source)
}

/// Loads an image file and counts the silhouettes in it.
pub fn count_silhouettes_in_file(path: impl AsRef<Path>, config: CounterConfig) -> Result<CountReport> {
    let path = path.as_ref();
    let image = image_helper::load(path)?;
    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );

    let report = SilhouetteCounter::new(config).report(&image)?;
    tracing::debug!(
        components = report.component_sizes.len(),
        sizes = ?report.component_sizes,
        size_threshold = ?report.size_threshold,
        "Scanned components"
    );
    tracing::info!(silhouettes = report.silhouettes, "Counted silhouettes");

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel_source::testing::{AsciiSource, UniformSource};
    use crate::core_modules::pixel::pixel::ColorSample;
    use crate::error::SilhouetteError;
    use image::{Rgb, RgbImage};

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.put_pixel(x, y, color);
            }
        }
    }

    #[test]
    fn all_light_image_counts_zero() {
        for (w, h) in [(1, 1), (1, 7), (40, 30)] {
            let img = RgbImage::from_pixel(w, h, WHITE);
            assert_eq!(count_silhouettes(&img).unwrap(), 0);
        }
    }

    #[test]
    fn one_block_is_one_silhouette() {
        let mut img = RgbImage::from_pixel(50, 40, WHITE);
        fill_rect(&mut img, 10, 10, 12, 7, BLACK);

        let report = SilhouetteCounter::default().report(&img).unwrap();
        assert_eq!(report.component_sizes, vec![84]);
        assert_eq!(report.size_threshold, Some(16));
        assert_eq!(report.silhouettes, 1);
        assert_eq!((report.width, report.height), (50, 40));
    }

    #[test]
    fn two_equal_blocks_are_two_silhouettes() {
        let mut img = RgbImage::from_pixel(60, 30, WHITE);
        fill_rect(&mut img, 5, 5, 10, 10, BLACK);
        fill_rect(&mut img, 30, 10, 10, 10, BLACK);

        assert_eq!(count_silhouettes(&img).unwrap(), 2);
    }

    #[test]
    fn tiny_speck_is_filtered_out() {
        let mut img = RgbImage::from_pixel(60, 30, WHITE);
        fill_rect(&mut img, 5, 5, 10, 10, BLACK);
        fill_rect(&mut img, 40, 20, 2, 5, BLACK);

        let report = SilhouetteCounter::default().report(&img).unwrap();
        assert_eq!(report.component_sizes, vec![100, 10]);
        assert_eq!(report.silhouettes, 1);
    }

    #[test]
    fn counting_twice_gives_the_same_answer() {
        let mut img = RgbImage::from_pixel(30, 30, WHITE);
        fill_rect(&mut img, 2, 2, 5, 5, BLACK);
        fill_rect(&mut img, 12, 12, 6, 6, BLACK);
        fill_rect(&mut img, 22, 3, 4, 4, BLACK);

        let counter = SilhouetteCounter::default();
        let first = counter.count(&img).unwrap();
        let second = counter.count(&img).unwrap();
        assert_eq!(first, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn diagonal_neighbors_are_separate_silhouettes() {
        let source = AsciiSource::new(
            "
            .....
            .#...
            ..#..
            .....
            ",
        );
        assert_eq!(count_silhouettes(&source).unwrap(), 2);
    }

    #[test]
    fn dark_origin_is_not_counted() {
        let source = AsciiSource::new(
            "
            #....
            .....
            ..##.
            ..##.
            ",
        );
        let report = SilhouetteCounter::default().report(&source).unwrap();
        assert_eq!(report.component_sizes, vec![4]);
        assert_eq!(report.silhouettes, 1);
    }

    #[test]
    fn threshold_comes_from_config() {
        let mut img = RgbImage::from_pixel(20, 20, WHITE);
        fill_rect(&mut img, 4, 4, 6, 6, Rgb([80, 80, 80]));

        assert_eq!(count_silhouettes(&img).unwrap(), 0);

        let lenient = SilhouetteCounter::new(CounterConfig { dark_threshold: 100 });
        assert_eq!(lenient.config().dark_threshold, 100);
        assert_eq!(lenient.count(&img).unwrap(), 1);
    }

    #[test]
    fn invalid_dimensions_are_reported() {
        let source = UniformSource {
            width: 0,
            height: 10,
            sample: ColorSample::default(),
            channel_max: 255,
        };
        let err = count_silhouettes(&source).unwrap_err();
        assert!(matches!(err, SilhouetteError::InvalidDimensions { width: 0, height: 10 }));
    }

    #[test]
    fn invalid_samples_are_reported() {
        let source = UniformSource {
            width: 3,
            height: 3,
            sample: ColorSample::new(256, 0, 0),
            channel_max: 255,
        };
        let err = count_silhouettes(&source).unwrap_err();
        assert!(matches!(err, SilhouetteError::InvalidColorSample { .. }));
    }

    #[test]
    fn counts_a_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figures.png");

        let mut img = RgbImage::from_pixel(40, 40, WHITE);
        fill_rect(&mut img, 3, 3, 8, 8, BLACK);
        fill_rect(&mut img, 20, 5, 7, 9, BLACK);
        fill_rect(&mut img, 10, 25, 9, 9, BLACK);
        fill_rect(&mut img, 35, 35, 1, 1, BLACK);
        image_helper::save_rgb(&path, &img).unwrap();

        let report = count_silhouettes_in_file(&path, CounterConfig::default()).unwrap();
        assert_eq!(report.component_sizes.len(), 4);
        assert_eq!(report.silhouettes, 3);
    }
}
