//! bucket_core - Multiplicative damage bucket model
//!
//! This library provides:
//! - Multiplier engine: combine buckets, average crit, sustained damage
//! - Budget allocator: proportional split of a mod capacity
//! - Geometry: rectangle and closed box mesh whose area/volume is the multiplier
//! - Crit simulation: rolled shots, including crit tiers past 100%
//! - Presets: TOML-loaded starting builds and slider ranges

pub mod allocation;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod prelude;
pub mod simulation;
pub mod types;

// Re-export core types for convenience
pub use allocation::{allocate, plan_budget, Allocation, BucketWeight, BudgetPlan};
pub use config::{default_preset, BuildPreset, ConfigError, InputRanges, SliderRange};
pub use engine::{
    average_crit_multiplier, box_volume, combine, evaluate, sustained_multiplier, BuildInput,
    BuildOutput,
};
pub use geometry::{box_mesh, rectangle, BoxMesh, Rectangle};
pub use simulation::CritSimulation;
pub use types::{BucketKind, CritProfile, FactionBonus, Modifier};
