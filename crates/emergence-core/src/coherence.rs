//! Directional alignment between two contexts.
//!
//! Coherence is `1 - d`, where `d` is the mean absolute difference across
//! the directional dimensions (`valence` and `grounding`), each difference
//! first normalized by its dimension's span. Identical directions score `1`;
//! opposite extremes score `0`.

use emergence_types::{Context, Dimension};
use rust_decimal::Decimal;

/// The dimensions that represent directional alignment.
pub const DIRECTIONAL_DIMENSIONS: [Dimension; 2] = [Dimension::Valence, Dimension::Grounding];

/// Coherence score in `[0, 1]` between two contexts.
pub fn coherence(a: &Context, b: &Context) -> Decimal {
    Decimal::ONE
        .saturating_sub(normalized_distance(a, b))
        .clamp(Decimal::ZERO, Decimal::ONE)
}

/// Mean span-normalized absolute difference over [`DIRECTIONAL_DIMENSIONS`].
pub fn normalized_distance(a: &Context, b: &Context) -> Decimal {
    let total = DIRECTIONAL_DIMENSIONS
        .into_iter()
        .map(|dimension| {
            let diff = a.get(dimension).saturating_sub(b.get(dimension)).abs();
            // Every directional dimension is bounded with a positive span.
            let span = dimension.span().unwrap_or(Decimal::ONE);
            diff.checked_div(span).unwrap_or(diff)
        })
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let count = Decimal::from(DIRECTIONAL_DIMENSIONS.len());
    total.checked_div(count).unwrap_or(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(valence: Decimal, grounding: Decimal) -> Context {
        Context::default()
            .with_clamped(Dimension::Valence, valence)
            .with_clamped(Dimension::Grounding, grounding)
    }

    #[test]
    fn identical_contexts_are_fully_coherent() {
        let a = ctx(Decimal::new(4, 1), Decimal::new(6, 1));
        assert_eq!(coherence(&a, &a), Decimal::ONE);
    }

    #[test]
    fn opposite_extremes_are_incoherent() {
        let a = ctx(Decimal::NEGATIVE_ONE, Decimal::ZERO);
        let b = ctx(Decimal::ONE, Decimal::ONE);
        assert_eq!(coherence(&a, &b), Decimal::ZERO);
    }

    #[test]
    fn valence_difference_is_normalized_by_its_span() {
        // valence: |0.7 - 0.8| / 2 = 0.05; grounding: |0.3 - 0.4| / 1 = 0.1
        // distance = 0.075, coherence = 0.925
        let a = ctx(Decimal::new(7, 1), Decimal::new(3, 1));
        let b = ctx(Decimal::new(8, 1), Decimal::new(4, 1));
        assert_eq!(normalized_distance(&a, &b), Decimal::new(75, 3));
        assert_eq!(coherence(&a, &b), Decimal::new(925, 3));
    }

    #[test]
    fn coherence_is_symmetric() {
        let a = ctx(Decimal::new(-2, 1), Decimal::new(9, 1));
        let b = ctx(Decimal::new(5, 1), Decimal::new(1, 1));
        assert_eq!(coherence(&a, &b), coherence(&b, &a));
    }

    #[test]
    fn non_directional_dimensions_are_ignored() {
        let a = ctx(Decimal::new(5, 1), Decimal::new(5, 1));
        let b = a
            .with_clamped(Dimension::Persistence, Decimal::ONE)
            .with_clamped(Dimension::Source, Decimal::MAX)
            .with_clamped(Dimension::Associations, Decimal::MAX);
        assert_eq!(coherence(&a, &b), Decimal::ONE);
    }
}
