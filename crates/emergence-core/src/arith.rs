//! Saturating decimal arithmetic shared by the operators.
//!
//! `source` and `associations` have no upper bound, so a valid context may
//! carry values near [`Decimal::MAX`]. Every helper saturates instead of
//! failing; the operators clamp the results afterwards.

use rust_decimal::Decimal;

/// `0.5`
const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The smallest positive step a [`Decimal`] can represent.
const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 28);

/// `prior * (1 - weight) + target * weight`
pub(crate) fn blend(prior: Decimal, target: Decimal, weight: Decimal) -> Decimal {
    let retained = prior.saturating_mul(Decimal::ONE.saturating_sub(weight));
    let incoming = target.saturating_mul(weight);
    retained.saturating_add(incoming)
}

/// `value * (1 - rate * magnitude)`
pub(crate) fn decay(value: Decimal, rate: Decimal, magnitude: Decimal) -> Decimal {
    let loss = rate.saturating_mul(magnitude);
    value.saturating_mul(Decimal::ONE.saturating_sub(loss))
}

/// Like [`decay`], but a positive `value` under a positive loss always ends
/// strictly lower, even when the product rounds back to `value` at 28 digits.
pub(crate) fn strict_decay(value: Decimal, rate: Decimal, magnitude: Decimal) -> Decimal {
    let decayed = decay(value, rate, magnitude);
    let losing = value > Decimal::ZERO && rate > Decimal::ZERO && magnitude > Decimal::ZERO;
    if losing && decayed >= value {
        value.saturating_sub(EPSILON).max(Decimal::ZERO)
    } else {
        decayed
    }
}

/// `a/2 + b/2`
pub(crate) fn midpoint(a: Decimal, b: Decimal) -> Decimal {
    a.saturating_mul(HALF).saturating_add(b.saturating_mul(HALF))
}
