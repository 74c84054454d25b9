/// A locale-independent amount, rounded to exactly two decimal places (half
/// away from zero). The only numeric form trusted inside this crate.
pub type CanonicalAmount = f64;

/// Largest magnitude accepted as a canonical amount. Beyond this, an f64 can no
/// longer represent every cent exactly.
pub const MAX_CANONICAL_MAGNITUDE: f64 = 1e13;
