//! Variable amounts: ranges and distributions over non-negative quantities.
//!
//! Descriptors never store a concrete count or depth. They store an [`AmountSource`]
//! that the generation pipeline samples with its own RNG at generation time.
use rand::RngCore;

pub mod variable;

pub use variable::VariableAmount;

/// A range or distribution over non-negative quantities.
///
/// Implementations are immutable once constructed. [`AmountSource::minimum`] and
/// [`AmountSource::maximum`] are deterministic and bound every value returned by
/// [`AmountSource::amount`].
pub trait AmountSource: Send + Sync {
    /// Smallest value a draw can produce.
    fn minimum(&self) -> f64;

    /// Largest value a draw can produce.
    fn maximum(&self) -> f64;

    /// Draw one sample.
    fn amount(&self, rng: &mut dyn RngCore) -> f64;

    /// Draw one sample and floor it into a whole count.
    ///
    /// Negative and non-finite samples collapse to zero, values above `u32::MAX` saturate.
    fn floored_amount(&self, rng: &mut dyn RngCore) -> u32 {
        floor_to_count(self.amount(rng))
    }
}

#[inline]
pub(crate) fn floor_to_count(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    value.floor() as u32
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 bits of mantissa
    ((rng.next_u64() >> 11) as f64) * (1.0 / ((1u64 << 53) as f64))
}
