//! The walkthrough: one non-negative counter taken through accepted writes,
//! rejected writes, and an operator that escapes its validator.

use entity_core::{Entity, EntityConfig};
use tracing::info;

/// One line of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: String,
    pub accepted: Option<bool>,
    pub value: i64,
}

impl Step {
    fn new(action: impl Into<String>, accepted: Option<bool>, value: i64) -> Self {
        Self {
            action: action.into(),
            accepted,
            value,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let outcome = match self.accepted {
            Some(true) => "accepted",
            Some(false) => "rejected",
            None => "-",
        };
        write!(f, "{:<28} {:<9} value = {}", self.action, outcome, self.value)
    }
}

pub fn run(start: i64, config: EntityConfig) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut counter = Entity::with_config(start, config);
    counter.set_validator(|v| *v >= 0);
    steps.push(Step::new(format!("new({start})"), None, *counter.get()));

    let ok = counter.set(-1);
    steps.push(Step::new("set(-1)", Some(ok), *counter.get()));

    let ok = counter.set(3);
    steps.push(Step::new("set(3)", Some(ok), *counter.get()));

    let ok = counter.increment();
    steps.push(Step::new("increment()", Some(ok), *counter.get()));

    counter -= 10;
    steps.push(Step::new("-= 10", None, *counter.get()));

    let mut flipped = &counter * -1;
    steps.push(Step::new("counter * -1 (new entity)", None, *flipped.get()));

    let ok = flipped.set(-4);
    steps.push(Step::new("flipped.set(-4)", Some(ok), *flipped.get()));

    info!(
        final_value = *counter.get(),
        flipped = *flipped.get(),
        "Walkthrough complete"
    );
    steps
}
