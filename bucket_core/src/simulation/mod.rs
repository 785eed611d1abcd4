//! Crit simulation - roll individual shots to check the average crit multiplier
//!
//! Crit chance above 100% is modelled as crit tiers: at 150% every shot
//! crits at least once and half of them crit a second time. A tier `t` hit
//! deals `1 + t * (multiplier - 1)`, so the long-run average is
//! `1 + chance * (multiplier - 1)` for any chance.

use crate::types::CritProfile;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default number of shots rolled by the front end
pub const DEFAULT_SHOTS: u32 = 10_000;

/// Outcome of rolling a batch of shots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CritSimulation {
    pub shots: u32,
    /// Shots that rolled at least tier 1
    pub crit_count: u32,
    /// Highest tier seen
    pub max_tier: u32,
    /// Sum of per-shot multipliers
    pub total_multiplier: f64,
}

impl CritSimulation {
    /// Roll `shots` independent shots
    pub fn run(crit: &CritProfile, shots: u32, rng: &mut impl Rng) -> Self {
        let mut result = CritSimulation {
            shots,
            ..Default::default()
        };

        for _ in 0..shots {
            let tier = roll_tier(crit.chance, rng);
            if tier > 0 {
                result.crit_count += 1;
            }
            result.max_tier = result.max_tier.max(tier);
            result.total_multiplier += tier_multiplier(tier, crit.multiplier);
        }

        log::debug!(
            "simulated {} shots: avg {:.4}, max tier {}",
            shots,
            result.average_multiplier(),
            result.max_tier
        );

        result
    }

    /// Mean per-shot multiplier
    pub fn average_multiplier(&self) -> f64 {
        if self.shots > 0 {
            self.total_multiplier / self.shots as f64
        } else {
            0.0
        }
    }

    /// Percentage of shots that crit at all
    pub fn crit_rate(&self) -> f64 {
        if self.shots > 0 {
            self.crit_count as f64 / self.shots as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Roll the crit tier of one shot
///
/// Non-positive or non-finite chances never crit.
pub fn roll_tier(chance: f64, rng: &mut impl Rng) -> u32 {
    if !chance.is_finite() || chance <= 0.0 {
        return 0;
    }
    let guaranteed = chance.floor();
    let remainder = chance - guaranteed;
    let bonus = if rng.gen::<f64>() < remainder { 1 } else { 0 };
    guaranteed as u32 + bonus
}

/// Damage multiplier of a tier `tier` hit
pub fn tier_multiplier(tier: u32, crit_multiplier: f64) -> f64 {
    1.0 + tier as f64 * (crit_multiplier - 1.0)
}
