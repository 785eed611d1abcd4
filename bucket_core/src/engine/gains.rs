//! Bucket gain analysis - where does the next mod do the most?
//!
//! Adding `x%` to a bucket already at `p%` scales the total by
//! `(1 + (p + x)/100) / (1 + p/100)`, which shrinks as `p` grows. Stacking
//! a bucket you already have is worth less than filling an empty one.

use super::multiplier::{combine, percent_factor};
use crate::types::Modifier;
use serde::{Deserialize, Serialize};

/// Name used for the hypothetical empty bucket
pub const NEW_BUCKET: &str = "new bucket";

/// Outcome of adding the extra percent to one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketGain {
    pub name: String,
    /// Percent the bucket holds before the extra mod
    pub current_percent: f64,
    /// Total multiplier after adding the extra mod here
    pub new_multiplier: f64,
    /// `new / current - 1`
    pub relative_gain: f64,
}

/// Gains for every existing bucket plus a new, empty one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainReport {
    pub current_multiplier: f64,
    pub extra_percent: f64,
    /// Existing buckets, best first
    pub gains: Vec<BucketGain>,
    /// Gain from opening a new bucket at `extra_percent`
    pub new_bucket: BucketGain,
}

impl GainReport {
    /// The existing bucket that benefits most, if any
    pub fn best_existing(&self) -> Option<&BucketGain> {
        self.gains.first()
    }
}

/// Rank where an extra `extra_percent` mod would do the most
pub fn bucket_gains(mods: &[Modifier], extra_percent: f64) -> GainReport {
    let percents: Vec<f64> = mods.iter().map(|m| m.percent).collect();
    let current_multiplier = combine(&percents);

    let mut gains: Vec<BucketGain> = mods
        .iter()
        .map(|m| {
            let ratio = percent_factor(m.percent + extra_percent) / m.factor();
            BucketGain {
                name: m.name.clone(),
                current_percent: m.percent,
                new_multiplier: current_multiplier * ratio,
                relative_gain: ratio - 1.0,
            }
        })
        .collect();
    gains.sort_by(|a, b| b.relative_gain.total_cmp(&a.relative_gain));

    let new_factor = percent_factor(extra_percent);
    let new_bucket = BucketGain {
        name: NEW_BUCKET.to_string(),
        current_percent: 0.0,
        new_multiplier: current_multiplier * new_factor,
        relative_gain: new_factor - 1.0,
    };

    log::trace!(
        "gain analysis over {} buckets (+{}%): new bucket gains {:.4}",
        mods.len(),
        extra_percent,
        new_bucket.relative_gain
    );

    GainReport {
        current_multiplier,
        extra_percent,
        gains,
        new_bucket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods() -> Vec<Modifier> {
        vec![
            Modifier::new("base", 165.0),
            Modifier::new("elemental", 90.0),
            Modifier::new("multishot", 90.0),
        ]
    }

    #[test]
    fn test_smallest_bucket_gains_most() {
        let report = bucket_gains(&mods(), 90.0);
        let best = report.best_existing().unwrap();
        assert!((best.current_percent - 90.0).abs() < f64::EPSILON);
        assert_eq!(report.gains.last().unwrap().name, "base");
    }

    #[test]
    fn test_new_bucket_beats_stacking() {
        let report = bucket_gains(&mods(), 90.0);
        for g in &report.gains {
            assert!(report.new_bucket.relative_gain >= g.relative_gain);
        }
        // +90% in an empty bucket is a 1.9x jump
        assert!((report.new_bucket.relative_gain - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_doubling_up_on_base() {
        // Serration at 165% plus another 90% base: 3.55 / 2.65
        let report = bucket_gains(&[Modifier::new("base", 165.0)], 90.0);
        let base = &report.gains[0];
        assert!((base.relative_gain - (3.55 / 2.65 - 1.0)).abs() < 1e-12);
        assert!((base.new_multiplier - 3.55).abs() < 1e-12);
    }

    #[test]
    fn test_no_buckets() {
        let report = bucket_gains(&[], 50.0);
        assert!(report.best_existing().is_none());
        assert!((report.current_multiplier - 1.0).abs() < f64::EPSILON);
        assert!((report.new_bucket.new_multiplier - 1.5).abs() < 1e-12);
    }
}
