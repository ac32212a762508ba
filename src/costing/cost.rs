use std::ops::{Add, AddAssign};

/// Generalized cost plus elapsed time for one edge or transition.
///
/// Both terms are seconds. Penalties only ever add to `cost`, never
/// to `secs`, so elapsed time stays physically accurate however the
/// search is steered. The handful of sub-unit multipliers a model may
/// apply (walkway discount, ferry preference) lower `cost` below
/// `secs` deliberately; those same multipliers bound the A* factor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cost {
    /// Penalized cost ordering the search.
    pub cost: f64,
    /// Real traversal time in seconds.
    pub secs: f64,
}

impl Cost {
    pub const fn new(cost: f64, secs: f64) -> Self {
        Self { cost, secs }
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost::new(self.cost + rhs.cost, self.secs + rhs.secs)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        self.cost += rhs.cost;
        self.secs += rhs.secs;
    }
}
