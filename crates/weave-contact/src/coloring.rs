//! Graph coloring for conflict-free stick batches.
//!
//! Organizes sticks into batches where no two sticks in a batch share a
//! point, so each batch can be corrected in parallel without write
//! conflicts.

use weave_mesh::Stick;

/// Stick coloring for batched relaxation.
///
/// Greedy coloring in emission order over the conflict graph, which has an
/// edge between two sticks if they share an endpoint. The result is
/// deterministic for a given stick order.
pub struct StickColoring;

impl StickColoring {
    /// Color `sticks` over a point array of length `point_count`.
    ///
    /// Returns one batch per color, each holding stick indices in ascending
    /// order. Sticks within a batch are point-disjoint.
    pub fn color_sticks(sticks: &[Stick], point_count: usize) -> Vec<Vec<usize>> {
        if sticks.is_empty() {
            return Vec::new();
        }

        // point → sticks touching it
        let mut point_to_sticks: Vec<Vec<usize>> = vec![Vec::new(); point_count];
        for (si, s) in sticks.iter().enumerate() {
            point_to_sticks[s.a.index()].push(si);
            point_to_sticks[s.b.index()].push(si);
        }

        let mut colors: Vec<usize> = vec![usize::MAX; sticks.len()];
        let mut used: Vec<bool> = Vec::new();
        let mut n_colors = 0;

        for (si, s) in sticks.iter().enumerate() {
            used.clear();
            used.resize(n_colors + 1, false);

            for endpoint in [s.a.index(), s.b.index()] {
                for &neighbor in &point_to_sticks[endpoint] {
                    let c = colors[neighbor];
                    if c != usize::MAX {
                        used[c] = true;
                    }
                }
            }

            // First free color; `used` has one slot past the current maximum
            let color = used.iter().position(|&u| !u).unwrap_or(n_colors);
            colors[si] = color;
            n_colors = n_colors.max(color + 1);
        }

        let mut batches: Vec<Vec<usize>> = vec![Vec::new(); n_colors];
        for (si, &color) in colors.iter().enumerate() {
            batches[color].push(si);
        }
        batches
    }
}
