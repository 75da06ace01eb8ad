pub mod binarized_grid;
pub mod binarizer;
pub mod component_scanner;
pub mod pixel;
pub mod pixel_source;
pub mod silhouette_filter;
pub mod utils;
