//! Property tests for the bucket math

use bucket_core::allocation::{allocate, BucketWeight};
use bucket_core::engine::combine;
use bucket_core::simulation::roll_tier;
use proptest::prelude::*;
use rand::SeedableRng;

fn rel_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn combine_single_bucket(p in -99.0f64..1000.0) {
        prop_assert!(rel_close(combine(&[p]), 1.0 + p / 100.0));
    }

    #[test]
    fn combine_pair_commutes(p1 in 0.0f64..330.0, p2 in 0.0f64..330.0) {
        prop_assert!(rel_close(combine(&[p1, p2]), combine(&[p2, p1])));
    }

    #[test]
    fn combine_ignores_order(mods in prop::collection::vec(0.0f64..330.0, 0..7)) {
        let forward = combine(&mods);
        let mut reversed = mods.clone();
        reversed.reverse();
        let mut sorted = mods.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        prop_assert!(rel_close(forward, combine(&reversed)));
        prop_assert!(rel_close(forward, combine(&sorted)));
    }

    #[test]
    fn allocation_sums_to_capacity(
        weights in prop::collection::vec(0.0f64..10.0, 1..6),
        capacity in 0.0f64..1000.0,
    ) {
        let named: Vec<BucketWeight> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| BucketWeight::new(format!("b{}", i), *w))
            .collect();
        let allocs = allocate(&named, capacity);
        prop_assert_eq!(allocs.len(), named.len());
        prop_assert!(allocs.iter().all(|a| a.percent >= 0.0));

        let total_weight: f64 = weights.iter().sum();
        let total: f64 = allocs.iter().map(|a| a.percent).sum();
        if total_weight > 0.0 {
            prop_assert!(rel_close(total, capacity));
        } else {
            prop_assert_eq!(total, 0.0);
        }
    }

    #[test]
    fn even_split_beats_any_split(split in 0.0f64..=1.0, capacity in 0.0f64..600.0) {
        let a = capacity * split;
        let b = capacity - a;
        let even = combine(&[capacity / 2.0, capacity / 2.0]);
        prop_assert!(combine(&[a, b]) <= even * (1.0 + 1e-12));
    }

    #[test]
    fn crit_tier_brackets_chance(chance in 0.0f64..5.0, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let tier = roll_tier(chance, &mut rng) as f64;
        prop_assert!(tier >= chance.floor());
        prop_assert!(tier <= chance.floor() + 1.0);
    }
}
