//! Rule-based recommendation scoring.

pub mod classify;
pub mod engine;
pub mod rules;

pub use classify::classify;
pub use engine::{RecommendationEngine, NO_INDICATORS_REASON};
pub use rules::{ScoringRule, RULES};
