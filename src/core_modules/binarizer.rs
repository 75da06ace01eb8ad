// THEORY:
// The `Binarizer` is the only place where color is looked at. It reduces an RGB
// sample to one bit: background or silhouette.
//
// A pixel is background as soon as any single channel rises above the threshold,
// so only pixels that are near-black in every channel are treated as silhouette.
// The threshold is expressed on the 8-bit scale; samples from deeper sources are
// scaled down with integer math before the comparison.

use crate::core_modules::pixel::pixel::{CHANNEL_MAX_8BIT, Channel, ColorClass, ColorSample, Coordinate};
use crate::error::{Result, SilhouetteError};

/// Channels at or below this value (on the 0-255 scale) count as dark.
pub const DEFAULT_DARK_THRESHOLD: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binarizer {
    pub threshold: u8,
}

impl Default for Binarizer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DARK_THRESHOLD,
        }
    }
}

impl Binarizer {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Classifies a sample whose channels range over `0..=channel_max`.
    /// Returns `None` if the sample falls outside that range.
    pub fn classify(&self, sample: ColorSample, channel_max: Channel) -> Option<ColorClass> {
        if channel_max == 0 || sample.max_channel() > channel_max {
            return None;
        }

        let is_light = sample
            .channels()
            .iter()
            .any(|&channel| normalize(channel, channel_max) > self.threshold);

        Some(if is_light { ColorClass::Light } else { ColorClass::Dark })
    }

    /// Same as `classify`, but reports an out-of-range sample as an error located at `(x, y)`.
    pub fn classify_at(
        &self,
        x: Coordinate,
        y: Coordinate,
        sample: ColorSample,
        channel_max: Channel,
    ) -> Result<ColorClass> {
        self.classify(sample, channel_max)
            .ok_or_else(|| SilhouetteError::InvalidColorSample {
                x,
                y,
                channel_max,
                sample: sample.channels(),
            })
    }
}

/// Scales a channel onto 0..=255. Caller guarantees `channel <= channel_max` and `channel_max > 0`.
fn normalize(channel: Channel, channel_max: Channel) -> u8 {
    if channel_max == CHANNEL_MAX_8BIT {
        return channel as u8;
    }
    (u32::from(channel) * u32::from(CHANNEL_MAX_8BIT) / u32::from(channel_max)) as u8
}
