use dicelab_core::consts::CURVE_SAMPLES;
use dicelab_core::curve::{interpolate_curve, linear_resample};
use dicelab_core::distribution::{compute, Method};

#[test]
fn reproduces_both_endpoints_exactly() {
    let dist = compute(2, Method::Enumerate).unwrap();
    let pts = interpolate_curve(&dist, CURVE_SAMPLES);

    assert_eq!(pts.len(), CURVE_SAMPLES);

    let (x0, y0) = pts[0];
    assert_eq!(x0, 2.0);
    assert_eq!(y0, dist.probability_of(2));

    let (x1, y1) = *pts.last().unwrap();
    assert_eq!(x1, 12.0);
    assert_eq!(y1, dist.probability_of(12));
}

#[test]
fn midpoint_is_the_exact_average() {
    let pts = linear_resample(&[0.0, 1.0], &[0.0, 1.0], 3);
    assert_eq!(pts, vec![(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)]);
}

#[test]
fn grid_hits_every_knot_when_counts_align() {
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let ys = [0.1, 0.3, 0.2, 0.5, 0.4, 0.6];
    // Six samples over five unit segments lands exactly on each knot.
    let pts = linear_resample(&xs, &ys, 6);

    for (i, &(x, y)) in pts.iter().enumerate() {
        assert_eq!(x, xs[i]);
        assert_eq!(y, ys[i]);
    }
}

#[test]
fn grid_is_evenly_spaced() {
    let dist = compute(3, Method::Enumerate).unwrap();
    let pts = interpolate_curve(&dist, 100);

    let step = (18.0 - 3.0) / 99.0;
    for pair in pts.windows(2) {
        assert!(((pair[1].0 - pair[0].0) - step).abs() < 1e-12);
    }
}

#[test]
fn interpolated_values_stay_within_knot_bounds() {
    let dist = compute(4, Method::Enumerate).unwrap();
    let peak = dist.probabilities().into_iter().fold(f64::MIN, f64::max);

    for (_, y) in interpolate_curve(&dist, CURVE_SAMPLES) {
        assert!(y >= 0.0 && y <= peak + 1e-12);
    }
}

#[test]
fn degenerate_inputs() {
    assert!(linear_resample(&[], &[], 10).is_empty());
    assert!(linear_resample(&[1.0, 2.0], &[0.5, 0.7], 0).is_empty());
    assert_eq!(linear_resample(&[3.0], &[0.9], 10), vec![(3.0, 0.9)]);
    assert_eq!(
        linear_resample(&[1.0, 2.0], &[0.5, 0.7], 1),
        vec![(1.0, 0.5)]
    );
}
