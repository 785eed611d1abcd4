//! One-shot report of a preset, for `--report`

use bucket_core::{
    allocation::{plan_budget, BudgetPlan},
    config::BuildPreset,
    engine::{
        bucket_gains, evaluate, format_damage, format_multiplier, percent_factor, BuildInput,
        BuildOutput, GainReport,
    },
    simulation::CritSimulation,
};
use rand::SeedableRng;
use serde::Serialize;

use crate::app::GAIN_PROBE_PERCENT;

/// Everything the TUI shows, evaluated once
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub preset: String,
    pub input: BuildInput,
    pub output: BuildOutput,
    pub rectangle_plan: BudgetPlan,
    pub cube_plan: BudgetPlan,
    pub gains: GainReport,
    pub simulation: CritSimulation,
}

impl Report {
    pub fn build(preset: &BuildPreset, seed: u64, shots: u32) -> Self {
        let input = preset.build.clone();
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

        Report {
            preset: preset.name.clone(),
            output: evaluate(&input),
            rectangle_plan: plan_budget(&preset.budget.rectangle, preset.budget.capacity),
            cube_plan: plan_budget(&preset.budget.cube, preset.budget.capacity),
            gains: bucket_gains(&input.cube_modifiers(), GAIN_PROBE_PERCENT),
            simulation: CritSimulation::run(&input.crit(), shots, &mut rng),
            input,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let i = &self.input;
        let o = &self.output;

        let mut lines = vec![
            format!("Damage Bucket Lab - {}", self.preset),
            String::new(),
            "1. The 2D Rectangle (Base vs Elemental)".to_string(),
            bucket_line("Base Damage", i.base_percent),
            bucket_line("Elemental", i.elemental_percent),
            format!("   Total Damage Multiplier: {}", format_multiplier(o.rectangle_multiplier)),
            format!(
                "   Formula: (1 + {}) × (1 + {})",
                i.base_percent / 100.0,
                i.elemental_percent / 100.0
            ),
            String::new(),
            "2. The 3D Cube (Adding Multishot)".to_string(),
            bucket_line("Multishot", i.multishot_percent),
            format!("   New Total Multiplier: {}", format_multiplier(o.cube_multiplier)),
            format!(
                "   Box {:.2} × {:.2} × {:.2}, volume {:.2}",
                o.mesh.dims[0],
                o.mesh.dims[1],
                o.mesh.dims[2],
                o.mesh.volume()
            ),
            String::new(),
            "3. The Full Build".to_string(),
            format!(
                "   Average Crit: {} ({:.0}% at {:.1}x)",
                format_multiplier(o.average_crit),
                i.crit_chance_percent,
                i.crit_multiplier
            ),
            format!("   Faction: {} -> {}", i.faction.label(), format_multiplier(o.faction_factor)),
            format!("   Fire Rate: {:.1}/s", i.fire_rate),
            format!("   Final Sustained Force: {} Damage Units", format_damage(o.sustained)),
            format!(
                "   Simulated crit average over {} shots: {} ({:.1}% crit)",
                self.simulation.shots,
                format_multiplier(self.simulation.average_multiplier()),
                self.simulation.crit_rate()
            ),
            String::new(),
            format!("4. Mod Budget ({:.0}% capacity)", self.rectangle_plan.capacity),
            plan_line("2D", &self.rectangle_plan),
            plan_line("3D", &self.cube_plan),
            String::new(),
            format!("Where should the next +{:.0}% go?", self.gains.extra_percent),
        ];

        for g in self.gains.gains.iter().chain(std::iter::once(&self.gains.new_bucket)) {
            lines.push(format!(
                "   {:<12} {} (+{:.1}%)",
                g.name,
                format_multiplier(g.new_multiplier),
                g.relative_gain * 100.0
            ));
        }

        lines.join("\n")
    }
}

fn bucket_line(name: &str, percent: f64) -> String {
    format!("   {:<12} {:>5.0}%  -> {:.2}", name, percent, percent_factor(percent))
}

fn plan_line(label: &str, plan: &BudgetPlan) -> String {
    let parts: Vec<String> = plan
        .allocations
        .iter()
        .map(|a| format!("{} {:.1}%", a.name, a.percent))
        .collect();
    let shape = match plan.box_mesh() {
        Some(mesh) => format!(
            ", box {:.2} × {:.2} × {:.2}",
            mesh.dims[0], mesh.dims[1], mesh.dims[2]
        ),
        None => String::new(),
    };
    format!(
        "   {}: {} -> {} (even {}, one bucket {}{})",
        label,
        parts.join(", "),
        format_multiplier(plan.multiplier),
        format_multiplier(plan.even_split_multiplier),
        format_multiplier(plan.single_bucket_multiplier),
        shape
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_headline_numbers() {
        let report = Report::build(&bucket_core::default_preset(), 42, 1000);
        let text = report.to_text();
        assert!(text.contains("Total Damage Multiplier: 5.03x"));
        assert!(text.contains("New Total Multiplier: 9.57x"));
        assert!(text.contains("Formula: (1 + 1.65) × (1 + 0.9)"));
        assert!(text.contains("Final Sustained Force: 71.75 Damage Units"));
        // 330 split three ways
        assert!(text.contains("box 2.10 × 2.10 × 2.10"));
    }

    #[test]
    fn test_json_report_round_trips_numbers() {
        let report = Report::build(&bucket_core::default_preset(), 42, 1000);
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let cube = value["output"]["cube_multiplier"].as_f64().unwrap();
        assert!((cube - 9.5665).abs() < 1e-9);
        assert_eq!(value["input"]["faction"], "none");
        assert_eq!(value["output"]["mesh"]["triangles"].as_array().unwrap().len(), 12);
    }
}
