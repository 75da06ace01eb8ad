// THEORY:
// This file is the entry point of the `silhouette_counter` library crate.
//
// The public surface is deliberately small: `count_silhouettes` and the
// `SilhouetteCounter` it wraps, the `PixelSource` trait a caller implements (or gets for
// free on `image` buffers), and the error type. The stages inside `core_modules` are
// public as well, for callers that want to inspect an intermediate grid or component list.

pub mod core_modules;
pub mod error;
pub mod pipeline;

pub use core_modules::pixel::pixel::{ColorClass, ColorSample};
pub use core_modules::pixel_source::PixelSource;
pub use error::{Result, SilhouetteError};
pub use pipeline::{
    CountReport, CounterConfig, SilhouetteCounter, count_silhouettes, count_silhouettes_in_file,
};
