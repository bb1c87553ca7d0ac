// Builder: assemble a Panini one step at a time instead of through a
// constructor that takes every option at once.

use std::fmt;
use tracing::trace;

pub const WHEAT_BUN: &str = "wheat";

/// A sandwich under construction.
///
/// `bun` is required up front. `meat` and `souce` start unset (`None`) and
/// become `Some(true)` once the matching step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panini {
    bun: String,
    meat: Option<bool>,
    souce: Option<bool>,
}

/// One optional construction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Bun,
    Meat,
    Souce,
}

impl Panini {
    pub fn new(bun: impl Into<String>) -> Self {
        Self {
            bun: bun.into(),
            meat: None,
            souce: None,
        }
    }

    /// Every option at once. Easy to call with the arguments in the wrong
    /// order, and nothing can be deferred.
    pub fn from_parts(bun: impl Into<String>, meat: bool, souce: bool) -> Self {
        Self {
            bun: bun.into(),
            meat: Some(meat),
            souce: Some(souce),
        }
    }

    pub fn add_bun(&mut self) -> &mut Self {
        self.bun = WHEAT_BUN.to_string();
        self
    }

    pub fn add_meat(&mut self) -> &mut Self {
        self.meat = Some(true);
        self
    }

    pub fn add_souce(&mut self) -> &mut Self {
        self.souce = Some(true);
        self
    }

    pub fn apply(&mut self, step: Step) -> &mut Self {
        trace!(?step, "applying panini step");
        match step {
            Step::Bun => self.add_bun(),
            Step::Meat => self.add_meat(),
            Step::Souce => self.add_souce(),
        }
    }

    pub fn bun(&self) -> &str {
        &self.bun
    }

    pub fn meat(&self) -> Option<bool> {
        self.meat
    }

    pub fn souce(&self) -> Option<bool> {
        self.souce
    }

    pub fn has_meat(&self) -> bool {
        self.meat.unwrap_or(false)
    }

    pub fn has_souce(&self) -> bool {
        self.souce.unwrap_or(false)
    }
}

impl fmt::Display for Panini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn flag(v: Option<bool>) -> &'static str {
            match v {
                Some(true) => "yes",
                Some(false) => "no",
                None => "unset",
            }
        }
        write!(
            f,
            "Panini {{ bun: {}, meat: {}, souce: {} }}",
            self.bun,
            flag(self.meat),
            flag(self.souce)
        )
    }
}

/// Consuming variant: each step takes the builder by value and hands it
/// back, so no half-built value is ever shared.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until `build` is called"]
pub struct PaniniBuilder {
    panini: Panini,
}

impl PaniniBuilder {
    pub fn new(bun: impl Into<String>) -> Self {
        Self {
            panini: Panini::new(bun),
        }
    }

    pub fn bun(mut self) -> Self {
        self.panini.add_bun();
        self
    }

    pub fn meat(mut self) -> Self {
        self.panini.add_meat();
        self
    }

    pub fn souce(mut self) -> Self {
        self.panini.add_souce();
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.panini.apply(step);
        self
    }

    pub fn steps(self, steps: impl IntoIterator<Item = Step>) -> Self {
        steps.into_iter().fold(self, PaniniBuilder::step)
    }

    pub fn build(self) -> Panini {
        self.panini
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let panini = Panini::new("gluten free");
        assert_eq!(panini.bun(), "gluten free");
        assert_eq!(panini.meat(), None);
        assert_eq!(panini.souce(), None);
        assert!(!panini.has_meat());
    }

    #[test]
    fn test_chained_steps() {
        let mut lunch = Panini::new("gluten free");
        lunch.add_bun().add_meat().add_souce();

        assert_eq!(lunch.bun(), "wheat");
        assert_eq!(lunch.meat(), Some(true));
        assert_eq!(lunch.souce(), Some(true));
    }

    #[test]
    fn test_chain_matches_sequential_calls() {
        let mut chained = Panini::new("gluten free");
        chained.add_souce().add_bun();

        let mut sequential = Panini::new("gluten free");
        sequential.add_souce();
        sequential.add_bun();

        assert_eq!(chained, sequential);
    }

    #[test]
    fn test_steps_are_idempotent() {
        let mut once = Panini::new("rye");
        once.add_meat();
        let mut twice = Panini::new("rye");
        twice.add_meat().add_meat();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_partial_build() {
        let mut lunch = Panini::new("rye");
        lunch.add_meat();

        assert_eq!(lunch.bun(), "rye");
        assert!(lunch.has_meat());
        assert_eq!(lunch.souce(), None);
        assert_eq!(lunch.to_string(), "Panini { bun: rye, meat: yes, souce: unset }");
    }

    #[test]
    fn test_from_parts_matches_builder() {
        let telescoped = Panini::from_parts("wheat", true, true);
        let built = PaniniBuilder::new("gluten free").souce().bun().meat().build();
        assert_eq!(telescoped, built);
    }

    #[test]
    fn test_builder_folds_steps() {
        let built = PaniniBuilder::new("gluten free")
            .steps([Step::Meat, Step::Meat, Step::Bun])
            .build();

        assert_eq!(built.bun(), "wheat");
        assert!(built.has_meat());
        assert!(!built.has_souce());
    }
}
