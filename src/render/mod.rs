//! IIS configuration rendering (rules, rewrite maps, output files)

pub mod output;
pub mod rules;
pub mod xml;

pub use output::{partition, write_documents, REWRITE_FILE, REWRITE_MAPS_FILE, RULES_FILE};
pub use rules::{build_rules, RuleSet};
