//! Score-to-classification mapping.

use crate::models::Classification;

/// Ordered (minimum score, classification) bands, scanned top to
/// bottom; the first band the score reaches wins. Everything below the
/// last band is STRONG_SELL.
const BANDS: &[(i32, Classification)] = &[
    (5, Classification::StrongBuy),
    (2, Classification::Buy),
    (-1, Classification::Hold),
    (-4, Classification::Sell),
];

pub fn classify(score: i32) -> Classification {
    BANDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, class)| *class)
        .unwrap_or(Classification::StrongSell)
}
