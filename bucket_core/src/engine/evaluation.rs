//! Full build evaluation - one immutable input, one output

use super::multiplier::{average_crit_multiplier, combine, percent_factor, sustained_multiplier};
use crate::geometry::{box_mesh, rectangle, BoxMesh, Rectangle};
use crate::types::{BucketKind, CritProfile, FactionBonus, Modifier};
use serde::{Deserialize, Serialize};

/// Every value the front end can adjust
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInput {
    /// Base damage % (e.g. Serration)
    pub base_percent: f64,
    /// Elemental damage %
    pub elemental_percent: f64,
    /// Multishot %
    pub multishot_percent: f64,
    /// Crit chance in percent (0-200 on the slider)
    pub crit_chance_percent: f64,
    /// Crit damage multiplier
    pub crit_multiplier: f64,
    /// Faction mod
    pub faction: FactionBonus,
    /// Shots per second
    pub fire_rate: f64,
}

impl Default for BuildInput {
    fn default() -> Self {
        BuildInput {
            base_percent: 165.0,
            elemental_percent: 90.0,
            multishot_percent: 90.0,
            crit_chance_percent: 50.0,
            crit_multiplier: 2.0,
            faction: FactionBonus::None,
            fire_rate: 5.0,
        }
    }
}

impl BuildInput {
    pub fn crit(&self) -> CritProfile {
        CritProfile::from_percent(self.crit_chance_percent, self.crit_multiplier)
    }

    /// The two buckets of the rectangle view
    pub fn rectangle_modifiers(&self) -> Vec<Modifier> {
        vec![
            Modifier::for_bucket(BucketKind::Base, self.base_percent),
            Modifier::for_bucket(BucketKind::Elemental, self.elemental_percent),
        ]
    }

    /// The three buckets of the cube view
    pub fn cube_modifiers(&self) -> Vec<Modifier> {
        let mut mods = self.rectangle_modifiers();
        mods.push(Modifier::for_bucket(BucketKind::Multishot, self.multishot_percent));
        mods
    }
}

/// Factor contributed by one bucket, for breakdown displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketFactor {
    pub kind: BucketKind,
    pub factor: f64,
}

/// Everything derived from a [`BuildInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOutput {
    /// Base × elemental
    pub rectangle_multiplier: f64,
    /// Base × elemental × multishot
    pub cube_multiplier: f64,
    /// Expected crit multiplier
    pub average_crit: f64,
    /// `1 + faction/100`
    pub faction_factor: f64,
    /// Cube × crit × faction × fire rate
    pub sustained: f64,
    /// Per-bucket factors in evaluation order
    pub breakdown: Vec<BucketFactor>,
    /// 2D view geometry
    pub rectangle: Rectangle,
    /// 3D view geometry
    pub mesh: BoxMesh,
}

impl BuildOutput {
    /// Product of every per-shot bucket (no fire rate)
    pub fn per_shot_multiplier(&self) -> f64 {
        self.breakdown.iter().map(|b| b.factor).product()
    }
}

/// Evaluate a build from scratch
pub fn evaluate(input: &BuildInput) -> BuildOutput {
    let rectangle_multiplier = combine(&[input.base_percent, input.elemental_percent]);
    let cube_multiplier = rectangle_multiplier * percent_factor(input.multishot_percent);

    let crit = input.crit();
    let average_crit = average_crit_multiplier(crit.chance, crit.multiplier);
    let faction_factor = percent_factor(input.faction.percent());
    let sustained = sustained_multiplier(cube_multiplier, average_crit, faction_factor, input.fire_rate);

    log::debug!(
        "evaluated build: 2d={:.4} 3d={:.4} crit={:.4} sustained={:.4}",
        rectangle_multiplier,
        cube_multiplier,
        average_crit,
        sustained
    );

    let breakdown: Vec<BucketFactor> = BucketKind::all()
        .iter()
        .map(|&kind| BucketFactor {
            kind,
            factor: match kind {
                BucketKind::Base => percent_factor(input.base_percent),
                BucketKind::Elemental => percent_factor(input.elemental_percent),
                BucketKind::Multishot => percent_factor(input.multishot_percent),
                BucketKind::Critical => average_crit,
                BucketKind::Faction => faction_factor,
            },
        })
        .collect();

    BuildOutput {
        rectangle_multiplier,
        cube_multiplier,
        average_crit,
        faction_factor,
        sustained,
        breakdown,
        rectangle: rectangle(input.base_percent, input.elemental_percent),
        mesh: box_mesh(input.base_percent, input.elemental_percent, input.multishot_percent),
    }
}
