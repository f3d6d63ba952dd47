//! Recommendation engine: snapshot in, recommendation out.

use crate::models::{Classification, IndicatorSnapshot, Recommendation};
use crate::scoring::classify::classify;
use crate::scoring::rules::RULES;

/// Reasoning entry emitted for a snapshot with no computed fields.
pub const NO_INDICATORS_REASON: &str = "no indicators available";

pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Run the rule table over a snapshot.
    ///
    /// Total over any snapshot: absent fields skip their rules, and an
    /// entirely empty snapshot short-circuits to a neutral HOLD.
    pub fn recommend(snapshot: &IndicatorSnapshot) -> Recommendation {
        if snapshot.is_empty() {
            return Recommendation {
                score: 0,
                classification: Classification::Hold,
                reasoning: vec![NO_INDICATORS_REASON.to_string()],
            };
        }

        let mut score = 0;
        let mut reasoning = Vec::new();
        for rule in RULES {
            if (rule.applies)(snapshot) {
                score += rule.delta;
                if let Some(reason) = rule.reason {
                    reasoning.push(reason.to_string());
                }
            }
        }

        Recommendation {
            score,
            classification: classify(score),
            reasoning,
        }
    }
}
