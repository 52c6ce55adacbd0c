use dicelab_core::distribution::{compute, Method};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn enumerated_distributions_are_well_formed(dice in 1u32..=6) {
        let dist = compute(dice, Method::Enumerate).unwrap();

        prop_assert_eq!(dist.len() as u32, 5 * dice + 1);
        prop_assert_eq!(dist.total_outcomes(), 6u64.pow(dice));

        let total: f64 = dist.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);

        // Symmetry holds exactly on the integer counts.
        for s in dist.sums() {
            prop_assert_eq!(dist.count_of(s), dist.count_of(7 * dice - s));
        }
    }

    #[test]
    fn backends_agree(dice in 1u32..=6) {
        let brute = compute(dice, Method::Enumerate).unwrap();
        let folded = compute(dice, Method::Convolve).unwrap();
        prop_assert_eq!(brute, folded);
    }

    #[test]
    fn convolution_scales_to_every_supported_count(dice in 1u32..=24) {
        let dist = compute(dice, Method::Convolve).unwrap();

        prop_assert_eq!(dist.len() as u32, 5 * dice + 1);
        prop_assert_eq!(dist.total_outcomes(), 6u64.pow(dice));

        let tally: u64 = dist.sums().iter().map(|&s| dist.count_of(s)).sum();
        prop_assert_eq!(tally, dist.total_outcomes());

        // Counts rise to the middle and fall off after it.
        let counts: Vec<u64> = dist.sums().iter().map(|&s| dist.count_of(s)).collect();
        let mid = counts.len() / 2;
        for pair in counts[..=mid].windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        for pair in counts[mid..].windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }
}
