//! Budget allocator - spread a fixed mod capacity across buckets
//!
//! Allocation is straight proportional: `allocated_i = weight_i / Σweight × capacity`.
//! A zero weight sum allocates nothing.

use crate::engine::combine;
use crate::geometry::{self, BoxMesh, Rectangle};
use crate::types::BucketKind;
use serde::{Deserialize, Serialize};

/// Relative priority for one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketWeight {
    pub name: String,
    pub weight: f64,
}

impl BucketWeight {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        BucketWeight {
            name: name.into(),
            weight,
        }
    }
}

/// Percent handed to one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub name: String,
    pub percent: f64,
}

/// Split `capacity` across the weighted buckets, preserving their order
pub fn allocate(weights: &[BucketWeight], capacity: f64) -> Vec<Allocation> {
    let total: f64 = weights.iter().map(|w| w.weight).sum();

    if total == 0.0 {
        log::debug!("allocate: weights sum to zero, nothing to distribute");
        return weights
            .iter()
            .map(|w| Allocation {
                name: w.name.clone(),
                percent: 0.0,
            })
            .collect();
    }

    weights
        .iter()
        .map(|w| Allocation {
            name: w.name.clone(),
            percent: w.weight / total * capacity,
        })
        .collect()
}

/// Base vs elemental
pub fn rectangle_weights(base: f64, elemental: f64) -> Vec<BucketWeight> {
    vec![
        BucketWeight::new(BucketKind::Base.id(), base),
        BucketWeight::new(BucketKind::Elemental.id(), elemental),
    ]
}

/// Base, elemental and multishot
pub fn cube_weights(base: f64, elemental: f64, multishot: f64) -> Vec<BucketWeight> {
    let mut weights = rectangle_weights(base, elemental);
    weights.push(BucketWeight::new(BucketKind::Multishot.id(), multishot));
    weights
}

/// An allocation together with the multiplier it buys
///
/// For the same capacity, the even split maximizes the product and dumping
/// everything in one bucket minimizes it. Both are reported for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub capacity: f64,
    pub allocations: Vec<Allocation>,
    /// Multiplier from the weighted allocation
    pub multiplier: f64,
    /// Multiplier if the capacity were split evenly
    pub even_split_multiplier: f64,
    /// Multiplier if the whole capacity went into one bucket
    pub single_bucket_multiplier: f64,
}

impl BudgetPlan {
    /// Weighted multiplier relative to the even split (1.0 = optimal)
    pub fn efficiency(&self) -> f64 {
        self.multiplier / self.even_split_multiplier
    }

    /// Allocated percents in bucket order
    pub fn percents(&self) -> Vec<f64> {
        self.allocations.iter().map(|a| a.percent).collect()
    }

    /// Rectangle for a two-bucket plan
    pub fn rectangle(&self) -> Option<Rectangle> {
        match self.percents().as_slice() {
            &[base, elem] => Some(geometry::rectangle(base, elem)),
            _ => None,
        }
    }

    /// Box for a three-bucket plan; its volume is `multiplier`
    pub fn box_mesh(&self) -> Option<BoxMesh> {
        match self.percents().as_slice() {
            &[base, elem, ms] => Some(geometry::box_mesh(base, elem, ms)),
            _ => None,
        }
    }
}

/// Allocate and evaluate a budget
pub fn plan_budget(weights: &[BucketWeight], capacity: f64) -> BudgetPlan {
    let allocations = allocate(weights, capacity);
    let percents: Vec<f64> = allocations.iter().map(|a| a.percent).collect();
    let multiplier = combine(&percents);

    let n = weights.len();
    let (even_split_multiplier, single_bucket_multiplier) = if n == 0 {
        (1.0, 1.0)
    } else {
        let even = vec![capacity / n as f64; n];
        let mut single = vec![0.0; n];
        single[0] = capacity;
        (combine(&even), combine(&single))
    };

    log::debug!(
        "budget plan over {} buckets, capacity {}: {:.4} (even {:.4})",
        n,
        capacity,
        multiplier,
        even_split_multiplier
    );

    BudgetPlan {
        capacity,
        allocations,
        multiplier,
        even_split_multiplier,
        single_bucket_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percents(allocs: &[Allocation]) -> Vec<f64> {
        allocs.iter().map(|a| a.percent).collect()
    }

    #[test]
    fn test_all_zero_weights() {
        let weights = cube_weights(0.0, 0.0, 0.0);
        for capacity in [0.0, 100.0, 1e6] {
            let allocs = allocate(&weights, capacity);
            assert_eq!(allocs.len(), 3);
            assert!(allocs.iter().all(|a| a.percent == 0.0));
        }
    }

    #[test]
    fn test_even_weights() {
        let allocs = allocate(&rectangle_weights(1.0, 1.0), 100.0);
        assert_eq!(percents(&allocs), vec![50.0, 50.0]);
        assert_eq!(allocs[0].name, "base");
        assert_eq!(allocs[1].name, "elemental");
    }

    #[test]
    fn test_uneven_weights_sum_exactly() {
        let allocs = allocate(&cube_weights(2.0, 1.0, 1.0), 200.0);
        assert_eq!(percents(&allocs), vec![100.0, 50.0, 50.0]);
        let sum: f64 = allocs.iter().map(|a| a.percent).sum();
        assert_eq!(sum, 200.0);
    }

    #[test]
    fn test_sum_within_tolerance() {
        let allocs = allocate(&cube_weights(3.0, 7.0, 11.0), 330.0);
        let sum: f64 = allocs.iter().map(|a| a.percent).sum();
        assert!(((sum - 330.0) / 330.0).abs() <= 1e-9);
        assert!(allocs.iter().all(|a| a.percent >= 0.0));
    }

    #[test]
    fn test_empty_weights() {
        assert!(allocate(&[], 100.0).is_empty());
        let plan = plan_budget(&[], 100.0);
        assert!((plan.multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plan_even_is_optimal() {
        let plan = plan_budget(&rectangle_weights(1.0, 1.0), 200.0);
        // 2 x 2 square
        assert!((plan.multiplier - 4.0).abs() < 1e-12);
        assert!((plan.efficiency() - 1.0).abs() < 1e-12);
        // 3 x 1 rectangle
        assert!((plan.single_bucket_multiplier - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_plan_geometry_matches_multiplier() {
        let plan = plan_budget(&cube_weights(2.0, 1.0, 1.0), 200.0);
        let mesh = plan.box_mesh().unwrap();
        // 2.0 x 1.5 x 1.5
        assert_eq!(mesh.dims, [2.0, 1.5, 1.5]);
        assert!((mesh.volume() - plan.multiplier).abs() < 1e-12);
        assert!(plan.rectangle().is_none());

        let flat = plan_budget(&rectangle_weights(1.0, 1.0), 200.0);
        let rect = flat.rectangle().unwrap();
        assert!((rect.area() - flat.multiplier).abs() < 1e-12);
        assert!(flat.box_mesh().is_none());
    }

    #[test]
    fn test_plan_lopsided_is_worse() {
        let plan = plan_budget(&cube_weights(5.0, 1.0, 0.0), 300.0);
        assert!(plan.multiplier < plan.even_split_multiplier);
        assert!(plan.multiplier > plan.single_bucket_multiplier);
        assert!(plan.efficiency() < 1.0);
    }
}
