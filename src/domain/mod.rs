mod cell;
mod cell_set;
mod rules;
mod patterns;
mod algorithm;
pub mod generation;

pub use cell::Cell;
pub use cell_set::CellSet;
pub use rules::{Rule, ConwayRule, HighLifeRule, SeedsRule, DayAndNightRule, all_rules, default_rule};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use generation::{StepStats, advance_generation, advance_generation_parallel, candidates, step};
