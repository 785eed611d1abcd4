//! Application state

use crate::logger::ConsoleLog;
use bucket_core::{
    allocation::{plan_budget, BucketWeight, BudgetPlan},
    config::{BuildPreset, SliderRange},
    engine::{bucket_gains, evaluate, percent_factor, BuildInput, BuildOutput, GainReport},
    simulation::{CritSimulation, DEFAULT_SHOTS},
    types::FactionBonus,
};
use rand::SeedableRng;

/// Extra percent used by the "where should the next mod go" panel
pub const GAIN_PROBE_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Rectangle,
    Cube,
    Build,
    Budget,
    Log,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Rectangle, Tab::Cube, Tab::Build, Tab::Budget, Tab::Log, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Rectangle => "2D Rectangle",
            Tab::Cube => "3D Cube",
            Tab::Build => "Full Build",
            Tab::Budget => "Budget",
            Tab::Log => "Log",
            Tab::Help => "Help",
        }
    }
}

/// One adjustable slider or select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Base,
    Elemental,
    Multishot,
    CritChance,
    CritMultiplier,
    Faction,
    FireRate,
    Capacity,
    RectangleWeight(usize),
    CubeWeight(usize),
}

pub struct App {
    pub current_tab: Tab,
    pub preset: BuildPreset,
    pub input: BuildInput,
    pub capacity: f64,
    pub rectangle_weights: Vec<BucketWeight>,
    pub cube_weights: Vec<BucketWeight>,
    pub selected: usize,
    pub seed: u64,
    /// Shots rolled per crit simulation
    pub shots: u32,
    pub log_scroll: usize,
    pub console: Option<ConsoleLog>,
    // Derived on every change
    pub output: BuildOutput,
    pub rectangle_plan: BudgetPlan,
    pub cube_plan: BudgetPlan,
    pub gains: GainReport,
    pub simulation: CritSimulation,
}

impl App {
    pub fn new(preset: BuildPreset, seed: u64, shots: u32) -> Self {
        let input = preset.build.clone();
        let capacity = preset.budget.capacity;
        let rectangle_weights = preset.budget.rectangle.clone();
        let cube_weights = preset.budget.cube.clone();

        let output = evaluate(&input);
        let rectangle_plan = plan_budget(&rectangle_weights, capacity);
        let cube_plan = plan_budget(&cube_weights, capacity);
        let gains = bucket_gains(&input.cube_modifiers(), GAIN_PROBE_PERCENT);
        let simulation = Self::simulate(&input, seed, shots);

        App {
            current_tab: Tab::Rectangle,
            preset,
            input,
            capacity,
            rectangle_weights,
            cube_weights,
            selected: 0,
            seed,
            shots,
            log_scroll: 0,
            console: None,
            output,
            rectangle_plan,
            cube_plan,
            gains,
            simulation,
        }
    }

    pub fn with_console(mut self, console: ConsoleLog) -> Self {
        self.console = Some(console);
        self
    }

    fn simulate(input: &BuildInput, seed: u64, shots: u32) -> CritSimulation {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        CritSimulation::run(&input.crit(), shots, &mut rng)
    }

    /// Re-run every formula from the current slider values
    pub fn recompute(&mut self) {
        self.output = evaluate(&self.input);
        self.rectangle_plan = plan_budget(&self.rectangle_weights, self.capacity);
        self.cube_plan = plan_budget(&self.cube_weights, self.capacity);
        self.gains = bucket_gains(&self.input.cube_modifiers(), GAIN_PROBE_PERCENT);
        self.simulation = Self::simulate(&self.input, self.seed, self.shots);
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.switch_to(tabs[next_idx]);
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.switch_to(tabs[prev_idx]);
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.switch_to(tabs[index]);
        }
    }

    fn switch_to(&mut self, tab: Tab) {
        if tab != self.current_tab {
            self.current_tab = tab;
            self.selected = 0;
        }
    }

    /// Controls shown on the current tab, top to bottom
    pub fn controls(&self) -> Vec<Control> {
        match self.current_tab {
            Tab::Rectangle => vec![Control::Base, Control::Elemental],
            Tab::Cube => vec![Control::Base, Control::Elemental, Control::Multishot],
            Tab::Build => vec![
                Control::CritChance,
                Control::CritMultiplier,
                Control::Faction,
                Control::FireRate,
            ],
            Tab::Budget => {
                let mut controls = vec![Control::Capacity];
                controls.extend((0..self.rectangle_weights.len()).map(Control::RectangleWeight));
                controls.extend((0..self.cube_weights.len()).map(Control::CubeWeight));
                controls
            }
            Tab::Log | Tab::Help => vec![],
        }
    }

    pub fn selected_control(&self) -> Option<Control> {
        self.controls().get(self.selected).copied()
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Log => {
                if self.log_scroll > 0 {
                    self.log_scroll -= 1;
                }
            }
            _ => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Log => {
                let lines = self.console.as_ref().map(|c| c.len()).unwrap_or(0);
                if self.log_scroll + 1 < lines {
                    self.log_scroll += 1;
                }
            }
            _ => {
                if self.selected + 1 < self.controls().len() {
                    self.selected += 1;
                }
            }
        }
    }

    pub fn on_left(&mut self, coarse: bool) {
        self.adjust_selected(if coarse { -10 } else { -1 });
    }

    pub fn on_right(&mut self, coarse: bool) {
        self.adjust_selected(if coarse { 10 } else { 1 });
    }

    fn adjust_selected(&mut self, steps: i32) {
        if let Some(control) = self.selected_control() {
            self.adjust(control, steps);
        }
    }

    /// Move a control by `steps` slider increments and re-evaluate
    pub fn adjust(&mut self, control: Control, steps: i32) {
        let ranges = &self.preset.ranges;
        match control {
            Control::Base => {
                self.input.base_percent = ranges.base_percent.nudge(self.input.base_percent, steps)
            }
            Control::Elemental => {
                self.input.elemental_percent =
                    ranges.elemental_percent.nudge(self.input.elemental_percent, steps)
            }
            Control::Multishot => {
                self.input.multishot_percent =
                    ranges.multishot_percent.nudge(self.input.multishot_percent, steps)
            }
            Control::CritChance => {
                self.input.crit_chance_percent = ranges
                    .crit_chance_percent
                    .nudge(self.input.crit_chance_percent, steps)
            }
            Control::CritMultiplier => {
                self.input.crit_multiplier =
                    ranges.crit_multiplier.nudge(self.input.crit_multiplier, steps)
            }
            Control::Faction => {
                self.input.faction = if steps > 0 {
                    self.input.faction.next()
                } else {
                    self.input.faction.prev()
                }
            }
            Control::FireRate => {
                self.input.fire_rate = ranges.fire_rate.nudge(self.input.fire_rate, steps)
            }
            Control::Capacity => self.capacity = ranges.capacity.nudge(self.capacity, steps),
            Control::RectangleWeight(i) => {
                if let Some(w) = self.rectangle_weights.get_mut(i) {
                    w.weight = ranges.weight.nudge(w.weight, steps);
                }
            }
            Control::CubeWeight(i) => {
                if let Some(w) = self.cube_weights.get_mut(i) {
                    w.weight = ranges.weight.nudge(w.weight, steps);
                }
            }
        }
        log::debug!("{} -> {}", self.control_label(control), self.control_display(control));
        self.recompute();
    }

    /// Slider range for a control, `None` for selects
    pub fn control_range(&self, control: Control) -> Option<SliderRange> {
        let r = &self.preset.ranges;
        match control {
            Control::Base => Some(r.base_percent),
            Control::Elemental => Some(r.elemental_percent),
            Control::Multishot => Some(r.multishot_percent),
            Control::CritChance => Some(r.crit_chance_percent),
            Control::CritMultiplier => Some(r.crit_multiplier),
            Control::Faction => None,
            Control::FireRate => Some(r.fire_rate),
            Control::Capacity => Some(r.capacity),
            Control::RectangleWeight(_) | Control::CubeWeight(_) => Some(r.weight),
        }
    }

    pub fn control_value(&self, control: Control) -> f64 {
        match control {
            Control::Base => self.input.base_percent,
            Control::Elemental => self.input.elemental_percent,
            Control::Multishot => self.input.multishot_percent,
            Control::CritChance => self.input.crit_chance_percent,
            Control::CritMultiplier => self.input.crit_multiplier,
            Control::Faction => self.input.faction.percent(),
            Control::FireRate => self.input.fire_rate,
            Control::Capacity => self.capacity,
            Control::RectangleWeight(i) => {
                self.rectangle_weights.get(i).map(|w| w.weight).unwrap_or(0.0)
            }
            Control::CubeWeight(i) => self.cube_weights.get(i).map(|w| w.weight).unwrap_or(0.0),
        }
    }

    pub fn control_label(&self, control: Control) -> String {
        match control {
            Control::Base => "Base Damage % (e.g., Serration)".to_string(),
            Control::Elemental => "Elemental % (e.g., Infected Clip)".to_string(),
            Control::Multishot => "Multishot % (e.g., Split Chamber)".to_string(),
            Control::CritChance => "Crit Chance %".to_string(),
            Control::CritMultiplier => "Crit Multiplier".to_string(),
            Control::Faction => "Faction Mod (Bane/Smite)".to_string(),
            Control::FireRate => "Fire Rate (per second)".to_string(),
            Control::Capacity => "Mod Capacity %".to_string(),
            Control::RectangleWeight(i) => format!(
                "2D weight: {}",
                self.rectangle_weights.get(i).map(|w| w.name.as_str()).unwrap_or("?")
            ),
            Control::CubeWeight(i) => format!(
                "3D weight: {}",
                self.cube_weights.get(i).map(|w| w.name.as_str()).unwrap_or("?")
            ),
        }
    }

    /// Value as shown next to the slider
    pub fn control_display(&self, control: Control) -> String {
        let value = self.control_value(control);
        match control {
            Control::Faction => self.input.faction.label(),
            Control::CritMultiplier => format!("{:.1}x", value),
            Control::FireRate => format!("{:.1}/s", value),
            Control::RectangleWeight(_) | Control::CubeWeight(_) => format!("{:.1}", value),
            _ => format!("{:.0}%", value),
        }
    }

    /// Restore every control to the preset
    pub fn reset(&mut self) {
        self.input = self.preset.build.clone();
        self.capacity = self.preset.budget.capacity;
        self.rectangle_weights = self.preset.budget.rectangle.clone();
        self.cube_weights = self.preset.budget.cube.clone();
        log::info!("reset to preset '{}'", self.preset.name);
        self.recompute();
    }

    /// Roll the crit simulation again with a fresh seed
    pub fn resimulate(&mut self) {
        self.reseed(rand::random());
    }

    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.simulation = Self::simulate(&self.input, seed, self.shots);
        log::info!(
            "crit simulation reseeded ({}): {:.3}x",
            seed,
            self.simulation.average_multiplier()
        );
    }

    pub fn faction(&self) -> FactionBonus {
        self.input.faction
    }

    /// Longest rectangle side the sliders can reach
    pub fn rectangle_max_side(&self) -> f64 {
        let r = &self.preset.ranges;
        let rect = &self.output.rectangle;
        [r.base_percent.max, r.elemental_percent.max]
            .into_iter()
            .map(percent_factor)
            .fold(rect.length.max(rect.width), f64::max)
    }

    /// Longest box side the sliders can reach
    pub fn cube_max_side(&self) -> f64 {
        let r = &self.preset.ranges;
        let dims = self.output.mesh.dims;
        [
            r.base_percent.max,
            r.elemental_percent.max,
            r.multishot_percent.max,
        ]
        .into_iter()
        .map(percent_factor)
        .fold(dims[0].max(dims[1]).max(dims[2]), f64::max)
    }

    /// Longest side a budget box can have: the whole capacity in one bucket
    pub fn budget_max_side(&self) -> f64 {
        percent_factor(self.capacity)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(bucket_core::default_preset(), 42, DEFAULT_SHOTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_preset_values() {
        let app = App::default();
        assert_eq!(app.current_tab, Tab::Rectangle);
        assert!((app.output.rectangle_multiplier - 5.035).abs() < 1e-9);
        assert_eq!(app.controls(), vec![Control::Base, Control::Elemental]);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut app = App::default();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Rectangle);
        app.set_tab(3);
        assert_eq!(app.current_tab, Tab::Budget);
        app.set_tab(99);
        assert_eq!(app.current_tab, Tab::Budget);
    }

    #[test]
    fn test_selection_resets_on_tab_change() {
        let mut app = App::default();
        app.on_down();
        assert_eq!(app.selected, 1);
        app.next_tab();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_adjust_recomputes() {
        let mut app = App::default();
        app.on_right(true);
        assert!((app.input.base_percent - 175.0).abs() < f64::EPSILON);
        // 2.75 * 1.90
        assert!((app.output.rectangle_multiplier - 5.225).abs() < 1e-9);
    }

    #[test]
    fn test_slider_clamps_at_max() {
        let mut app = App::default();
        for _ in 0..50 {
            app.on_right(true);
        }
        assert!((app.input.base_percent - 330.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_faction_select() {
        let mut app = App::default();
        app.set_tab(2);
        app.on_down();
        app.on_down();
        assert_eq!(app.selected_control(), Some(Control::Faction));
        app.on_right(false);
        assert_eq!(app.faction(), FactionBonus::Bane);
        assert_eq!(app.control_display(Control::Faction), "+30%");
        assert!((app.output.sustained - 93.273375).abs() < 1e-9);
    }

    #[test]
    fn test_budget_controls() {
        let mut app = App::default();
        app.set_tab(3);
        let controls = app.controls();
        assert_eq!(controls.len(), 6);
        assert_eq!(controls[1], Control::RectangleWeight(0));
        assert_eq!(controls[3], Control::CubeWeight(0));

        app.adjust(Control::CubeWeight(0), 2);
        // weights 2, 1, 1 of 330
        assert!((app.cube_plan.allocations[0].percent - 165.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_restores_preset() {
        let mut app = App::default();
        app.adjust(Control::Multishot, 10);
        app.adjust(Control::Capacity, -3);
        app.reset();
        assert_eq!(app.input, app.preset.build);
        assert!((app.capacity - app.preset.budget.capacity).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reseed_is_deterministic() {
        let mut a = App::default();
        let mut b = App::default();
        a.reseed(7);
        b.reseed(7);
        assert_eq!(a.simulation, b.simulation);
    }

    #[test]
    fn test_canvas_extent_follows_ranges() {
        let app = App::default();
        // 330% default maximum
        assert!((app.rectangle_max_side() - 4.3).abs() < 1e-12);
        assert!((app.cube_max_side() - 4.3).abs() < 1e-12);

        let mut preset = bucket_core::default_preset();
        preset.ranges.base_percent.max = 600.0;
        preset.build.base_percent = 600.0;
        let wide = App::new(preset, 42, 100);
        assert!((wide.rectangle_max_side() - 7.0).abs() < 1e-12);
        assert!((wide.cube_max_side() - 7.0).abs() < 1e-12);
        assert!(wide.output.mesh.dims[0] <= wide.cube_max_side());
    }

    #[test]
    fn test_budget_extent_fits_allocation() {
        let mut app = App::default();
        let side = app.budget_max_side();
        let mesh = app.cube_plan.box_mesh().unwrap();
        assert!(mesh.dims.iter().all(|&d| d <= side));

        app.adjust(Control::Capacity, 10);
        assert!((app.budget_max_side() - percent_factor(app.capacity)).abs() < 1e-12);
    }

    #[test]
    fn test_shot_count_survives_changes() {
        let mut app = App::new(bucket_core::default_preset(), 42, 500);
        assert_eq!(app.simulation.shots, 500);
        app.adjust(Control::CritChance, 10);
        assert_eq!(app.simulation.shots, 500);
        app.reseed(9);
        assert_eq!(app.simulation.shots, 500);
        app.reset();
        assert_eq!(app.simulation.shots, 500);
    }
}
