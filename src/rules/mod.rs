//! Linting rules

pub mod base;

// Individual rule implementations
pub mod npm100_private_methods;

use base::LintRule;

/// Get all available rules
pub fn get_all_rules() -> Vec<Box<dyn LintRule>> {
    vec![Box::new(
        npm100_private_methods::PrivateMethodsRule::new(),
    )]
}

/// Get all available rule IDs
pub fn get_all_rule_ids() -> Vec<String> {
    get_all_rules()
        .into_iter()
        .map(|rule| rule.rule_id().to_string())
        .collect()
}
