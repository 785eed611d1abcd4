//! Multiplier math - every bucket multiplies the rest
//!
//! A bucket at `p%` contributes a factor of `1 + p/100`. Buckets multiply,
//! so the total is:
//!
//! `Π(1 + p_i/100)`
//!
//! None of these functions validate their input. Out-of-range values
//! (negative fire rate, NaN) flow through as ordinary float results.

/// Factor contributed by a single bucket at `percent`
pub fn percent_factor(percent: f64) -> f64 {
    1.0 + percent / 100.0
}

/// Combine a sequence of bucket percentages into one multiplier
///
/// The empty product is `1.0`. Order never matters.
pub fn combine(mods: &[f64]) -> f64 {
    mods.iter().map(|p| percent_factor(*p)).product()
}

/// Expected multiplier from critical hits: `1 + chance * (multiplier - 1)`
///
/// `chance_fraction` above 1.0 is allowed and not clamped.
pub fn average_crit_multiplier(chance_fraction: f64, crit_multiplier: f64) -> f64 {
    1.0 + chance_fraction * (crit_multiplier - 1.0)
}

/// Headline sustained figure: per-shot multiplier scaled by crit, faction and fire rate
pub fn sustained_multiplier(
    base_factor: f64,
    crit_factor: f64,
    faction_factor: f64,
    fire_rate: f64,
) -> f64 {
    base_factor * crit_factor * faction_factor * fire_rate
}

/// Volume of a box with the given side lengths
pub fn box_volume(dims: [f64; 3]) -> f64 {
    dims[0] * dims[1] * dims[2]
}

/// Format a multiplier for display, e.g. `5.03x`
///
/// Rounds the exact binary value to two decimals, so `2.65 * 1.90`
/// (stored just below 5.035) shows as `5.03x`.
pub fn format_multiplier(value: f64) -> String {
    format!("{:.2}x", value)
}

/// Format a sustained damage figure, e.g. `93.27`
pub fn format_damage(value: f64) -> String {
    format!("{:.2}", value)
}
