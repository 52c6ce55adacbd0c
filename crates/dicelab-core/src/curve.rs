//! Linear resampling of a distribution onto a dense, evenly spaced grid,
//! used by the chart layer to draw a smooth curve through the data points.

use crate::distribution::SumDistribution;

/// Piecewise-linear interpolation of `(xs, ys)` knots over an evenly
/// spaced grid spanning `[xs[0], xs[last]]`.
///
/// `xs` must be strictly increasing. Both endpoints are reproduced
/// exactly; the grid never leaves the knot span.
pub fn linear_resample(xs: &[f64], ys: &[f64], samples: usize) -> Vec<(f64, f64)> {
    assert_eq!(xs.len(), ys.len(), "knot arrays must have equal length");

    if xs.is_empty() || samples == 0 {
        return Vec::new();
    }
    if xs.len() == 1 || samples == 1 {
        return vec![(xs[0], ys[0])];
    }

    let x0 = xs[0];
    let x1 = xs[xs.len() - 1];
    let step = (x1 - x0) / (samples - 1) as f64;

    let mut seg = 0usize;
    let mut out = Vec::with_capacity(samples);
    for i in 0..samples {
        let x = if i == samples - 1 {
            x1
        } else {
            x0 + step * i as f64
        };

        while seg + 2 < xs.len() && xs[seg + 1] < x {
            seg += 1;
        }

        let (xa, xb) = (xs[seg], xs[seg + 1]);
        let (ya, yb) = (ys[seg], ys[seg + 1]);
        let t = if xb > xa {
            ((x - xa) / (xb - xa)).clamp(0.0, 1.0)
        } else {
            0.0
        };

        // Knots are reproduced bit-exactly, not via the lerp.
        let y = if t <= 0.0 {
            ya
        } else if t >= 1.0 {
            yb
        } else {
            ya + (yb - ya) * t
        };
        out.push((x, y));
    }
    out
}

/// Resamples a distribution's `(sum, probability)` points into a curve
/// of `samples` points across the full support.
pub fn interpolate_curve(dist: &SumDistribution, samples: usize) -> Vec<(f64, f64)> {
    let xs: Vec<f64> = dist.sums().iter().map(|&s| s as f64).collect();
    let ys = dist.probabilities();
    linear_resample(&xs, &ys, samples)
}
