//! 8-connected component labelling over a binary candidate grid.
//!
//! Breadth-first flood fill with an explicit queue and a flat visited grid, so
//! a frame-sized uniform region cannot exhaust the stack. Every pixel is
//! enqueued at most once.

use std::collections::VecDeque;

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Returns every maximal 8-connected set of `true` cells as a list of flat
/// indices, in the row-major order of each component's first pixel.
pub(crate) fn connected_components(candidates: &[bool], width: usize, height: usize) -> Vec<Vec<usize>> {
    debug_assert_eq!(candidates.len(), width * height);

    let mut visited = vec![false; candidates.len()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..candidates.len() {
        if !candidates[start] || visited[start] {
            continue;
        }

        let mut component = Vec::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(index) = queue.pop_front() {
            component.push(index);
            let x = (index % width) as isize;
            let y = (index / width) as isize;

            for (dx, dy) in NEIGHBORS_8 {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                    continue;
                }
                let neighbor = ny as usize * width + nx as usize;
                if candidates[neighbor] && !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        components.push(component);
    }

    components
}
