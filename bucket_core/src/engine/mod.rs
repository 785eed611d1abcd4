//! Multiplier engine - bucket math, full build evaluation and gain analysis

mod evaluation;
mod gains;
mod multiplier;

pub use evaluation::{evaluate, BucketFactor, BuildInput, BuildOutput};
pub use gains::{bucket_gains, BucketGain, GainReport, NEW_BUCKET};
pub use multiplier::{
    average_crit_multiplier, box_volume, combine, format_damage, format_multiplier,
    percent_factor, sustained_multiplier,
};
