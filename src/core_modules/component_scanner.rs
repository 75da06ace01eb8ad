// THEORY:
// The `ComponentScanner` is the engine of the counter. It implements a two-level
// breadth-first search over the `BinarizedGrid` using 4-connectivity.
//
// Key architectural principles & algorithm steps:
// 1.  **Outer Flood-Fill**: Starting from the origin `(0, 0)`, an outer queue walks the
//     background. The origin is always treated as background, whatever its class.
// 2.  **Discovery**: Whenever the outer walk meets a `Free` dark neighbor, that pixel
//     belongs to a silhouette nobody has seen yet. An inner BFS is started on the spot.
// 3.  **Inner Trace**: The inner queue consumes the whole silhouette, counting pixels.
//     Background pixels found along its border are handed to the outer queue. This
//     cross-queue handoff is what lets the outer walk continue behind the silhouette,
//     including into holes enclosed by it.
// 4.  **Monotonic State**: A pixel is `Reserved` the moment it enters either queue and
//     `Watched` once processed. Only `Free` pixels are ever queued, so each pixel enters
//     exactly one queue exactly once and the whole scan is O(width * height).
//
// Known constraint: a dark origin is walked as background and never counted. Dark
// pixels that touch only diagonally belong to different silhouettes.

use crate::core_modules::binarized_grid::BinarizedGrid;
use crate::core_modules::pixel::pixel::ColorClass;
use std::collections::VecDeque;

pub mod component_scanner {
    use super::*;

    /// Walks the grid from the origin and returns the pixel count of every
    /// silhouette it finds, in discovery order.
    ///
    /// The grid is consumed in the sense that all reachable records end up `Watched`;
    /// scanning the same grid a second time finds nothing.
    pub fn scan_components(grid: &mut BinarizedGrid) -> Vec<usize> {
        let mut component_sizes = Vec::new();
        let mut watch_queue: VecDeque<usize> = VecDeque::new();

        let origin = 0;
        if !grid.record(origin).is_free() {
            return component_sizes;
        }
        grid.record_mut(origin).reserve();
        watch_queue.push_back(origin);

        while let Some(current) = watch_queue.pop_front() {
            // Freeness is checked per neighbor: tracing a silhouette for an earlier
            // neighbor may already have reserved a later one.
            for neighbor in grid.neighbors(current).into_iter().flatten() {
                if !grid.record(neighbor).is_free() {
                    continue;
                }
                match grid.record(neighbor).class {
                    ColorClass::Light => {
                        grid.record_mut(neighbor).reserve();
                        watch_queue.push_back(neighbor);
                    }
                    ColorClass::Dark => {
                        let size = trace_component(grid, neighbor, &mut watch_queue);
                        component_sizes.push(size);
                    }
                }
            }
            grid.record_mut(current).watch();
        }

        component_sizes
    }

    /// Inner BFS: consumes the silhouette containing `seed` and returns its size.
    /// Background pixels on its border are pushed onto `watch_queue`.
    fn trace_component(grid: &mut BinarizedGrid, seed: usize, watch_queue: &mut VecDeque<usize>) -> usize {
        let mut size = 0;
        let mut dark_queue: VecDeque<usize> = VecDeque::new();
        grid.record_mut(seed).reserve();
        dark_queue.push_back(seed);

        while let Some(current) = dark_queue.pop_front() {
            size += 1;
            grid.record_mut(current).watch();

            for neighbor in grid.neighbors(current).into_iter().flatten() {
                if !grid.record(neighbor).is_free() {
                    continue;
                }
                grid.record_mut(neighbor).reserve();
                match grid.record(neighbor).class {
                    ColorClass::Light => watch_queue.push_back(neighbor),
                    ColorClass::Dark => dark_queue.push_back(neighbor),
                }
            }
        }

        size
    }
}
