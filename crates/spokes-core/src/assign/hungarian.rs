//! Rectangular Hungarian (Kuhn–Munkres) solver.
//!
//! # Algorithm
//!
//! The potentials formulation in O(rows² · cols): for each row we grow an
//! alternating tree over columns, maintaining dual potentials `u`/`v` and
//! per-column slack `minv`, then augment along the cheapest exposed
//! column. Rectangular inputs are handled by requiring `rows <= cols`
//! internally and transposing when the caller's matrix is taller than
//! wide, so exactly `min(rows, cols)` pairs come back.
//!
//! # Determinism
//!
//! Columns are scanned in ascending index order and slack ties keep the
//! lowest column, so equal-cost optima resolve identically on every run.

/// Minimum-cost matching over a dense rectangular matrix.
///
/// Returns `min(rows, cols)` matched `(row, col)` index pairs, sorted by
/// row index. An empty or degenerate matrix yields no pairs.
#[must_use]
pub fn solve_rectangular(costs: &[Vec<f64>]) -> Vec<(usize, usize)> {
    let rows = costs.len();
    let cols = costs.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    if rows <= cols {
        solve_wide(costs, rows, cols)
    } else {
        // Transpose so rows <= cols, then swap the pairs back.
        let transposed: Vec<Vec<f64>> = (0..cols)
            .map(|j| (0..rows).map(|i| costs[i][j]).collect())
            .collect();
        let mut pairs: Vec<(usize, usize)> = solve_wide(&transposed, cols, rows)
            .into_iter()
            .map(|(row, col)| (col, row))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

/// Core solver; requires `rows <= cols`. Indices are 1-based internally
/// (index 0 is the virtual unmatched slot, as in the classic
/// formulation).
fn solve_wide(costs: &[Vec<f64>], rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut u = vec![0.0_f64; rows + 1];
    let mut v = vec![0.0_f64; cols + 1];
    // matched_row[j] = row currently assigned to column j (0 = free).
    let mut matched_row = vec![0_usize; cols + 1];
    let mut way = vec![0_usize; cols + 1];

    for i in 1..=rows {
        matched_row[0] = i;
        let mut j0 = 0_usize;
        let mut minv = vec![f64::INFINITY; cols + 1];
        let mut used = vec![false; cols + 1];

        // Grow the alternating tree until a free column is reached.
        loop {
            used[j0] = true;
            let i0 = matched_row[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0_usize;

            for j in 1..=cols {
                if used[j] {
                    continue;
                }
                let reduced = costs[i0 - 1][j - 1] - u[i0] - v[j];
                if reduced < minv[j] {
                    minv[j] = reduced;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }

            for j in 0..=cols {
                if used[j] {
                    u[matched_row[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if matched_row[j0] == 0 {
                break;
            }
        }

        // Augment: flip the matching along the found path.
        loop {
            let j1 = way[j0];
            matched_row[j0] = matched_row[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut pairs: Vec<(usize, usize)> = (1..=cols)
        .filter(|&j| matched_row[j] != 0)
        .map(|j| (matched_row[j] - 1, j - 1))
        .collect();
    pairs.sort_unstable();
    pairs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
