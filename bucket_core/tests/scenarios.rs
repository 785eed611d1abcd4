//! Worked examples: the rectangle, the cube and the full build

use bucket_core::engine::{format_damage, format_multiplier, percent_factor};
use bucket_core::prelude::*;

const EPS: f64 = 1e-9;

#[test]
fn scenario_a_rectangle() {
    // Serration at 165% and one elemental mod at 90%
    let mult = combine(&[165.0, 90.0]);
    assert!((mult - 2.65 * 1.90).abs() < EPS);
    assert!((mult - 5.035).abs() < EPS);
    assert_eq!(format_multiplier(mult), "5.03x");
}

#[test]
fn scenario_b_cube() {
    let mult = combine(&[165.0, 90.0, 90.0]);
    assert!((mult - 9.5665).abs() < EPS);
    assert_eq!(format_multiplier(mult), "9.57x");
}

#[test]
fn scenario_c_full_build() {
    let cube = combine(&[165.0, 90.0, 90.0]);
    let crit = average_crit_multiplier(50.0 / 100.0, 2.0);
    assert!((crit - 1.5).abs() < EPS);

    let sustained = sustained_multiplier(cube, crit, percent_factor(30.0), 5.0);
    assert!((sustained - 93.273375).abs() < EPS);
    assert_eq!(format_damage(sustained), "93.27");
}

#[test]
fn scenario_c_through_evaluate() {
    let input = BuildInput {
        base_percent: 165.0,
        elemental_percent: 90.0,
        multishot_percent: 90.0,
        crit_chance_percent: 50.0,
        crit_multiplier: 2.0,
        faction: FactionBonus::Bane,
        fire_rate: 5.0,
    };
    let out = evaluate(&input);
    assert_eq!(format_multiplier(out.rectangle_multiplier), "5.03x");
    assert_eq!(format_multiplier(out.cube_multiplier), "9.57x");
    assert!((out.sustained - 93.273375).abs() < EPS);
}

#[test]
fn box_volume_cross_checks_combine() {
    let percents = [165.0, 90.0, 90.0];
    let dims = [
        percent_factor(percents[0]),
        percent_factor(percents[1]),
        percent_factor(percents[2]),
    ];
    assert!((box_volume(dims) - combine(&percents)).abs() < EPS);
    assert!((box_mesh(165.0, 90.0, 90.0).volume() - combine(&percents)).abs() < EPS);
}

#[test]
fn allocation_examples() {
    let two = allocate(
        &[BucketWeight::new("base", 1.0), BucketWeight::new("elemental", 1.0)],
        100.0,
    );
    assert_eq!(two[0].percent, 50.0);
    assert_eq!(two[1].percent, 50.0);

    let three = allocate(
        &[
            BucketWeight::new("base", 2.0),
            BucketWeight::new("elemental", 1.0),
            BucketWeight::new("multishot", 1.0),
        ],
        200.0,
    );
    let percents: Vec<f64> = three.iter().map(|a| a.percent).collect();
    assert_eq!(percents, vec![100.0, 50.0, 50.0]);
    assert_eq!(percents.iter().sum::<f64>(), 200.0);
}

#[test]
fn rectangle_and_cube_plans_are_independent() {
    let preset = default_preset();
    let rect = plan_budget(&preset.budget.rectangle, preset.budget.capacity);
    let cube = plan_budget(&preset.budget.cube, preset.budget.capacity);

    assert_eq!(rect.allocations.len(), 2);
    assert_eq!(cube.allocations.len(), 3);
    // 330 split two ways: 2.65 x 2.65
    assert!((rect.multiplier - 2.65 * 2.65).abs() < EPS);
    // 330 split three ways: 2.1^3
    assert!((cube.multiplier - 2.1_f64.powi(3)).abs() < EPS);
    // Adding a dimension with the same budget is worth more
    assert!(cube.multiplier > rect.multiplier);
}

#[test]
fn stacking_one_bucket_loses_to_a_new_one() {
    let mods = BuildInput::default().cube_modifiers();
    let report = bucket_gains(&mods, 90.0);
    let best = report.best_existing().expect("three buckets");
    assert!(report.new_bucket.new_multiplier > best.new_multiplier);
}
