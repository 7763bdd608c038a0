use anyhow::{ensure, Result};
use crate::step::Step;

/// The ordered, immutable content table. Built once at startup and
/// never mutated; guaranteed non-empty so cursor arithmetic is total.
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        ensure!(!steps.is_empty(), "a script must contain at least one step");
        Ok(Self { steps })
    }

    /// Panics when `index` is out of range; the controller invariant
    /// keeps its cursor inside `0..len()`.
    pub fn step_at(&self, index: usize) -> &Step {
        &self.steps[index]
    }

    #[allow(clippy::len_without_is_empty)] // construction guarantees non-empty
    pub fn len(&self) -> usize {
        self.steps.len()
    }
}
