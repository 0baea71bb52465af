// File: crates/grains-core/src/compare.rs
// Summary: Fixed real-world reference quantities and comparison verdicts.

/// A named real-world magnitude the running total is measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonFact {
    pub name: &'static str,
    pub magnitude: f64,
}

impl ComparisonFact {
    pub const fn new(name: &'static str, magnitude: f64) -> Self {
        Self { name, magnitude }
    }
}

pub fn world_population() -> ComparisonFact {
    ComparisonFact::new("world population", 8.0e9)
}

pub fn seconds_in_a_million_years() -> ComparisonFact {
    ComparisonFact::new("seconds in a million years", 3.15e13)
}

pub fn sand_grains_on_earth() -> ComparisonFact {
    ComparisonFact::new("grains of sand on Earth", 7.5e18)
}

pub fn stars_in_observable_universe() -> ComparisonFact {
    ComparisonFact::new("stars in the observable universe", 1.0e24)
}

/// Built-in reference set, smallest magnitude first.
pub fn references() -> Vec<ComparisonFact> {
    vec![
        world_population(),
        seconds_in_a_million_years(),
        sand_grains_on_earth(),
        stars_in_observable_universe(),
    ]
}

/// Verdict of one reference against a running total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    pub fact: ComparisonFact,
    /// total / magnitude; display-only precision.
    pub ratio: f64,
    pub exceeds: bool,
}

impl Comparison {
    pub fn evaluate(fact: ComparisonFact, total: u128) -> Self {
        let ratio = total as f64 / fact.magnitude;
        Self { fact, ratio, exceeds: ratio >= 1.0 }
    }

    /// One-line verdict for the text panel.
    pub fn summary(&self) -> String {
        if self.exceeds {
            format!("exceeds {} by {:.2}x", self.fact.name, self.ratio)
        } else {
            format!("{:.2e} of {}", self.ratio, self.fact.name)
        }
    }
}

/// Evaluate the built-in reference set against a running total.
pub fn evaluate_all(total: u128) -> Vec<Comparison> {
    references().into_iter().map(|f| Comparison::evaluate(f, total)).collect()
}
