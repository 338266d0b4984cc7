// file: src/matcher/mod.rs
// description: criteria matching module exports
// reference: internal module structure

pub mod criteria;

pub use criteria::{CriteriaMatcher, Verdict, skill_predicate};
