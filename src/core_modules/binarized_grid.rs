// THEORY:
// The `BinarizedGrid` is the arena the scanner works in. It is built once from a
// `PixelSource`, runs every sample through the `Binarizer`, and from then on owns
// one `PixelRecord` per pixel.
//
// Key architectural principles:
// 1.  **Arena Indexing**: Records live in a single row-major `Vec`. Everything outside
//     the grid refers to a record by its index, never by a cloned copy, so a state
//     change made through one path is seen by every other path.
// 2.  **Fixed Shape**: Width and height are validated at construction and never change.
//     Every coordinate in `[0, width) x [0, height)` has exactly one record.
// 3.  **Snapshot**: The source is read exactly once. Later changes to the source have
//     no effect on a grid that has already been built.

use crate::core_modules::binarizer::Binarizer;
use crate::core_modules::pixel::pixel::{ColorClass, Coordinate, PixelRecord};
use crate::core_modules::pixel_source::PixelSource;
use crate::error::{Result, SilhouetteError};

/// Indices of the 4-connected neighbors of a cell, in the order left, up, right, down.
/// Out-of-bounds directions are `None`.
pub type Neighbors = [Option<usize>; 4];

#[derive(Debug, Clone)]
pub struct BinarizedGrid {
    width: Coordinate,
    height: Coordinate,
    records: Vec<PixelRecord>,
}

impl BinarizedGrid {
    /// Snapshots `source` into a fully `Free` grid.
    pub fn build<S: PixelSource + ?Sized>(source: &S, binarizer: &Binarizer) -> Result<Self> {
        let width = source.width();
        let height = source.height();
        if width == 0 || height == 0 {
            return Err(SilhouetteError::InvalidDimensions { width, height });
        }

        let channel_max = source.channel_max();
        let mut records = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let class = binarizer.classify_at(x, y, source.color_at(x, y), channel_max)?;
                records.push(PixelRecord::new(x, y, class));
            }
        }

        Ok(Self {
            width,
            height,
            records,
        })
    }

    pub fn width(&self) -> Coordinate {
        self.width
    }

    pub fn height(&self) -> Coordinate {
        self.height
    }

    pub fn records(&self) -> &[PixelRecord] {
        &self.records
    }

    pub fn get(&self, x: Coordinate, y: Coordinate) -> Option<&PixelRecord> {
        self.index_of(x, y).map(|index| &self.records[index])
    }

    pub fn class_at(&self, x: Coordinate, y: Coordinate) -> Option<ColorClass> {
        self.get(x, y).map(|record| record.class)
    }

    pub fn dark_pixel_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_dark()).count()
    }

    /// Arena index of `(x, y)`, or `None` if it lies outside the grid.
    pub fn index_of(&self, x: Coordinate, y: Coordinate) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub(crate) fn record(&self, index: usize) -> &PixelRecord {
        &self.records[index]
    }

    pub(crate) fn record_mut(&mut self, index: usize) -> &mut PixelRecord {
        &mut self.records[index]
    }

    pub(crate) fn neighbors(&self, index: usize) -> Neighbors {
        let (x, y) = (self.records[index].x, self.records[index].y);
        let row = self.width as usize;
        [
            (x > 0).then(|| index - 1),
            (y > 0).then(|| index - row),
            (x + 1 < self.width).then(|| index + 1),
            (y + 1 < self.height).then(|| index + row),
        ]
    }
}
