//! Separable Gaussian smoothing of the particle grid.
//!
//! Produces the local-density field used to score diffusability. The
//! convolution wraps around both axes, keeping the density estimate
//! consistent with the toroidal metric used everywhere else.

use nucleo_space::Torus2D;

/// One-dimensional Gaussian kernel, truncated at 4σ and normalized.
fn kernel(sigma: f64) -> Vec<f64> {
    let radius = (4.0 * sigma + 0.5) as usize;
    let mut weights = Vec::with_capacity(2 * radius + 1);
    for k in -(radius as i64)..=(radius as i64) {
        let x = k as f64;
        weights.push((-x * x / (2.0 * sigma * sigma)).exp());
    }
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Smooth the counts with a Gaussian of width `sigma` per axis.
///
/// Returns one density value per cell in rank order. Because the wrapped
/// kernel sums to one, the field total equals the particle total.
pub(crate) fn gaussian_smooth(space: &Torus2D, counts: &[u32], sigma: f64) -> Vec<f64> {
    debug_assert_eq!(counts.len(), space.cell_count());
    let rows = space.rows() as usize;
    let cols = space.cols() as usize;
    let weights = kernel(sigma);
    let radius = (weights.len() / 2) as i64;

    // Horizontal pass.
    let mut pass: Vec<f64> = vec![0.0; counts.len()];
    for r in 0..rows {
        for c in 0..cols {
            let mut acc = 0.0;
            for (i, w) in weights.iter().enumerate() {
                let cc = (c as i64 + i as i64 - radius).rem_euclid(cols as i64) as usize;
                acc += w * f64::from(counts[r * cols + cc]);
            }
            pass[r * cols + c] = acc;
        }
    }

    // Vertical pass.
    let mut out: Vec<f64> = vec![0.0; counts.len()];
    for r in 0..rows {
        for c in 0..cols {
            let mut acc = 0.0;
            for (i, w) in weights.iter().enumerate() {
                let rr = (r as i64 + i as i64 - radius).rem_euclid(rows as i64) as usize;
                acc += w * pass[rr * cols + c];
            }
            out[r * cols + c] = acc;
        }
    }
    out
}
