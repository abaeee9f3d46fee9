use crate::models::{RuleContext, Violation};

/// Base trait for all linting rules
pub trait LintRule: Send + Sync {
    /// The unique identifier for this rule (e.g., "NPM100")
    fn rule_id(&self) -> &str;

    /// Perform the lint check on a top-level statement
    fn check(&self, context: &RuleContext) -> Vec<Violation>;

    /// Get the rule description
    fn description(&self) -> &str;
}
