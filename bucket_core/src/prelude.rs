//! Prelude module for convenient imports
//!
//! ```rust
//! use bucket_core::prelude::*;
//! ```

// Core types
pub use crate::types::{BucketKind, CritProfile, FactionBonus, Modifier};

// Engine
pub use crate::engine::{
    average_crit_multiplier, box_volume, bucket_gains, combine, evaluate, format_multiplier,
    percent_factor, sustained_multiplier, BuildInput, BuildOutput, GainReport,
};

// Allocation
pub use crate::allocation::{allocate, plan_budget, Allocation, BucketWeight, BudgetPlan};

// Geometry
pub use crate::geometry::{box_mesh, rectangle, BoxMesh, Rectangle};

// Simulation
pub use crate::simulation::CritSimulation;

// Config
pub use crate::config::{default_preset, BuildPreset, InputRanges};
