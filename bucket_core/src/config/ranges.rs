//! Slider bounds for every adjustable input
//!
//! The math never checks these. They exist so the front end can keep
//! values in a sensible range and so presets can be validated on load.

use serde::{Deserialize, Serialize};

/// Inclusive range with a step size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_step() -> f64 {
    1.0
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        SliderRange { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Move `value` by `steps` increments, staying in range
    pub fn nudge(&self, value: f64, steps: i32) -> f64 {
        let moved = value + self.step * steps as f64;
        // Snap to the step grid so repeated float adds don't drift
        let snapped = ((moved - self.min) / self.step).round() * self.step + self.min;
        self.clamp(snapped)
    }

    /// Position of `value` in the range, 0.0..=1.0
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Bounds of every slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRanges {
    #[serde(default = "default_base")]
    pub base_percent: SliderRange,
    #[serde(default = "default_elemental")]
    pub elemental_percent: SliderRange,
    #[serde(default = "default_multishot")]
    pub multishot_percent: SliderRange,
    /// Goes past 100% on purpose
    #[serde(default = "default_crit_chance")]
    pub crit_chance_percent: SliderRange,
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: SliderRange,
    #[serde(default = "default_fire_rate")]
    pub fire_rate: SliderRange,
    #[serde(default = "default_capacity")]
    pub capacity: SliderRange,
    #[serde(default = "default_weight")]
    pub weight: SliderRange,
}

impl Default for InputRanges {
    fn default() -> Self {
        InputRanges {
            base_percent: default_base(),
            elemental_percent: default_elemental(),
            multishot_percent: default_multishot(),
            crit_chance_percent: default_crit_chance(),
            crit_multiplier: default_crit_multiplier(),
            fire_rate: default_fire_rate(),
            capacity: default_capacity(),
            weight: default_weight(),
        }
    }
}

impl InputRanges {
    /// Every range with its field name, for validation messages
    pub fn named(&self) -> [(&'static str, &SliderRange); 8] {
        [
            ("base_percent", &self.base_percent),
            ("elemental_percent", &self.elemental_percent),
            ("multishot_percent", &self.multishot_percent),
            ("crit_chance_percent", &self.crit_chance_percent),
            ("crit_multiplier", &self.crit_multiplier),
            ("fire_rate", &self.fire_rate),
            ("capacity", &self.capacity),
            ("weight", &self.weight),
        ]
    }
}

fn default_base() -> SliderRange {
    SliderRange::new(0.0, 330.0, 1.0)
}
fn default_elemental() -> SliderRange {
    SliderRange::new(0.0, 330.0, 1.0)
}
fn default_multishot() -> SliderRange {
    SliderRange::new(0.0, 240.0, 1.0)
}
fn default_crit_chance() -> SliderRange {
    SliderRange::new(0.0, 200.0, 1.0)
}
fn default_crit_multiplier() -> SliderRange {
    SliderRange::new(1.0, 10.0, 0.1)
}
fn default_fire_rate() -> SliderRange {
    SliderRange::new(1.0, 20.0, 0.1)
}
fn default_capacity() -> SliderRange {
    SliderRange::new(0.0, 600.0, 5.0)
}
fn default_weight() -> SliderRange {
    SliderRange::new(0.0, 10.0, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let ranges = InputRanges::default();
        assert!((ranges.base_percent.max - 330.0).abs() < f64::EPSILON);
        assert!((ranges.multishot_percent.max - 240.0).abs() < f64::EPSILON);
        assert!((ranges.crit_chance_percent.max - 200.0).abs() < f64::EPSILON);
        assert!((ranges.crit_multiplier.min - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nudge_clamps() {
        let range = SliderRange::new(0.0, 10.0, 1.0);
        assert!((range.nudge(9.0, 5) - 10.0).abs() < f64::EPSILON);
        assert!((range.nudge(1.0, -5) - 0.0).abs() < f64::EPSILON);
        assert!((range.nudge(4.0, 1) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nudge_does_not_drift() {
        let range = default_crit_multiplier();
        let mut value = 2.0;
        for _ in 0..10 {
            value = range.nudge(value, 1);
        }
        assert!((value - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fraction() {
        let range = SliderRange::new(1.0, 21.0, 1.0);
        assert!((range.fraction(11.0) - 0.5).abs() < f64::EPSILON);
        assert!((range.fraction(50.0) - 1.0).abs() < f64::EPSILON);
        assert_eq!(SliderRange::new(5.0, 5.0, 1.0).fraction(5.0), 0.0);
    }

    #[test]
    fn test_parse_partial_ranges() {
        let toml = r#"
[fire_rate]
min = 0.5
max = 30
step = 0.5
"#;
        let ranges: InputRanges = toml::from_str(toml).unwrap();
        assert!((ranges.fire_rate.max - 30.0).abs() < f64::EPSILON);
        // Untouched fields keep their defaults
        assert!((ranges.base_percent.max - 330.0).abs() < f64::EPSILON);
    }
}
