//! Core types for the bucket model

use serde::{Deserialize, Serialize};

/// A multiplicative damage-modifier category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    Base,
    Elemental,
    Multishot,
    Critical,
    Faction,
}

impl BucketKind {
    /// Get all bucket kinds
    pub fn all() -> &'static [BucketKind] {
        &[
            BucketKind::Base,
            BucketKind::Elemental,
            BucketKind::Multishot,
            BucketKind::Critical,
            BucketKind::Faction,
        ]
    }

    /// Identifier used in allocations and presets
    pub fn id(&self) -> &'static str {
        match self {
            BucketKind::Base => "base",
            BucketKind::Elemental => "elemental",
            BucketKind::Multishot => "multishot",
            BucketKind::Critical => "critical",
            BucketKind::Faction => "faction",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            BucketKind::Base => "Base Damage",
            BucketKind::Elemental => "Elemental",
            BucketKind::Multishot => "Multishot",
            BucketKind::Critical => "Critical",
            BucketKind::Faction => "Faction",
        }
    }
}

/// A named percentage bonus contributing a factor of `1 + percent/100`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    /// Bucket identifier (e.g. "base", "elemental")
    pub name: String,
    /// Percentage bonus; negative values are debuffs
    pub percent: f64,
}

impl Modifier {
    pub fn new(name: impl Into<String>, percent: f64) -> Self {
        Modifier {
            name: name.into(),
            percent,
        }
    }

    /// Create a modifier for a known bucket
    pub fn for_bucket(kind: BucketKind, percent: f64) -> Self {
        Modifier::new(kind.id(), percent)
    }

    /// The multiplicative factor this modifier contributes
    pub fn factor(&self) -> f64 {
        crate::engine::percent_factor(self.percent)
    }
}

/// Critical hit profile
///
/// `chance` is a fraction where 1.0 = 100%. Values above 1.0 model
/// guaranteed crits with a chance at a higher crit tier and are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CritProfile {
    /// Crit chance as a fraction (0.5 = 50%)
    pub chance: f64,
    /// Crit damage multiplier (2.0 = double damage)
    pub multiplier: f64,
}

impl CritProfile {
    pub fn new(chance: f64, multiplier: f64) -> Self {
        CritProfile { chance, multiplier }
    }

    /// Build from a chance slider expressed in percent
    pub fn from_percent(chance_percent: f64, multiplier: f64) -> Self {
        CritProfile::new(chance_percent / 100.0, multiplier)
    }

    /// Expected-value multiplier: `1 + chance * (multiplier - 1)`
    pub fn average_multiplier(&self) -> f64 {
        crate::engine::average_crit_multiplier(self.chance, self.multiplier)
    }
}

impl Default for CritProfile {
    fn default() -> Self {
        CritProfile {
            chance: 0.5,
            multiplier: 2.0,
        }
    }
}

/// Faction damage mod, selected from a fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactionBonus {
    #[default]
    None,
    /// +30%
    Bane,
    /// +55%
    Primed,
}

impl FactionBonus {
    pub fn all() -> &'static [FactionBonus] {
        &[FactionBonus::None, FactionBonus::Bane, FactionBonus::Primed]
    }

    pub fn percent(&self) -> f64 {
        match self {
            FactionBonus::None => 0.0,
            FactionBonus::Bane => 30.0,
            FactionBonus::Primed => 55.0,
        }
    }

    /// Label shown next to the select ("None", "+30%", "+55%")
    pub fn label(&self) -> String {
        match self {
            FactionBonus::None => "None".to_string(),
            other => format!("+{:.0}%", other.percent()),
        }
    }

    fn index(&self) -> usize {
        FactionBonus::all()
            .iter()
            .position(|f| f == self)
            .unwrap_or(0)
    }

    /// Next bonus in the select, stopping at the last one
    pub fn next(&self) -> FactionBonus {
        let all = FactionBonus::all();
        all[(self.index() + 1).min(all.len() - 1)]
    }

    /// Previous bonus in the select, stopping at the first one
    pub fn prev(&self) -> FactionBonus {
        FactionBonus::all()[self.index().saturating_sub(1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_factor() {
        let m = Modifier::for_bucket(BucketKind::Base, 165.0);
        assert_eq!(m.name, "base");
        assert!((m.factor() - 2.65).abs() < 1e-12);
    }

    #[test]
    fn test_crit_from_percent_is_not_clamped() {
        let crit = CritProfile::from_percent(150.0, 3.0);
        assert!((crit.chance - 1.5).abs() < f64::EPSILON);
        // 1 + 1.5 * 2 = 4
        assert!((crit.average_multiplier() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_faction_select_order() {
        let percents: Vec<f64> = FactionBonus::all().iter().map(|f| f.percent()).collect();
        assert_eq!(percents, vec![0.0, 30.0, 55.0]);
        assert_eq!(FactionBonus::Bane.prev(), FactionBonus::None);
        assert_eq!(FactionBonus::Bane.next(), FactionBonus::Primed);
    }

    #[test]
    fn test_faction_labels() {
        assert_eq!(FactionBonus::None.label(), "None");
        assert_eq!(FactionBonus::Bane.label(), "+30%");
        assert_eq!(FactionBonus::Primed.label(), "+55%");
    }

    #[test]
    fn test_faction_cycle_saturates() {
        assert_eq!(FactionBonus::Primed.next(), FactionBonus::Primed);
        assert_eq!(FactionBonus::None.prev(), FactionBonus::None);
        assert_eq!(FactionBonus::None.next().next(), FactionBonus::Primed);
    }
}
