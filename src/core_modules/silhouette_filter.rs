// THEORY:
// Scanning finds every dark region, including specks of noise. The `SilhouetteFilter`
// throws the specks away with a deliberately coarse rule: anything smaller than a fifth
// of the average component size is noise. It assumes real silhouettes are all of a
// similar size and much larger than the noise.

/// A component must reach `average / NOISE_DIVISOR` pixels to count as a silhouette.
pub const NOISE_DIVISOR: usize = 5;

/// Stateless size filter over a list of component sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilhouetteFilter;

impl SilhouetteFilter {
    /// `floor(sum / (count * 5))`, or `None` when there are no components.
    pub fn size_threshold(component_sizes: &[usize]) -> Option<usize> {
        if component_sizes.is_empty() {
            return None;
        }
        let total: u64 = component_sizes.iter().map(|&size| size as u64).sum();
        let divisor = component_sizes.len() as u64 * NOISE_DIVISOR as u64;
        Some((total / divisor) as usize)
    }

    /// Number of components at or above the size threshold. An empty list counts 0.
    pub fn count(component_sizes: &[usize]) -> usize {
        match Self::size_threshold(component_sizes) {
            Some(threshold) => component_sizes.iter().filter(|&&size| size >= threshold).count(),
            None => 0,
        }
    }
}
