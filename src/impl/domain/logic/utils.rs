use crate::entities::CanonicalAmount;

/// Scale at which binary representation noise is discarded before rounding to
/// cents (i.e. anything below a millionth of a cent is treated as noise).
const NOISE_SCALE: f64 = 1e6;

/// Rounds to two decimal places, half away from zero.
///
/// A plain `(x * 100.0).round() / 100.0` gets values like `1.005` wrong because
/// `1.005 * 100.0 == 100.49999999999999`. The product is first snapped to the
/// nearest millionth of a cent, which absorbs that error for any amount within
/// ordinary currency magnitude.
pub fn round2(value: f64) -> CanonicalAmount {
    if !value.is_finite() {
        return 0.0;
    }
    let cents = ((value * 100.0 * NOISE_SCALE).round() / NOISE_SCALE).round();
    let rounded = cents / 100.0;
    // Avoid handing out -0.0.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Integer cents of an amount. Only exact up to `MAX_CANONICAL_MAGNITUDE`;
/// callers clamp larger values first.
pub fn to_cents(value: CanonicalAmount) -> i64 {
    (round2(value) * 100.0).round() as i64
}
