//! The closed set of amount distributions used by descriptors.
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::amount::{rand01, AmountSource};
use crate::error::{Error, Result};

/// A validated, immutable distribution over non-negative quantities.
///
/// Variants can be matched on but only built through the validating constructors, so
/// every value upholds `0 <= minimum() <= maximum()` with finite bounds.
///
/// Equality and hashing compare the variant and the exact bit pattern of each number
/// (with `-0.0` folded into `0.0`), which keeps [`Eq`] and [`Hash`] consistent.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAmount"))]
#[derive(Clone, Copy, Debug)]
pub enum VariableAmount {
    /// Always the same value.
    #[non_exhaustive]
    Fixed { value: f64 },
    /// Uniform over `[min, max)`, or exactly `min` when both bounds match.
    #[non_exhaustive]
    Range { min: f64, max: f64 },
    /// Uniform over `[base - variance, base + variance)`.
    #[non_exhaustive]
    BaseWithVariance { base: f64, variance: f64 },
    /// `base` plus a uniform draw from `[0, addition)`.
    #[non_exhaustive]
    BaseWithAddition { base: f64, addition: f64 },
    /// Like [`VariableAmount::BaseWithVariance`] with probability `chance`, otherwise `base`.
    #[non_exhaustive]
    OptionalVariance {
        base: f64,
        variance: f64,
        chance: f64,
    },
    /// Like [`VariableAmount::BaseWithAddition`] with probability `chance`, otherwise `base`.
    #[non_exhaustive]
    OptionalAddition {
        base: f64,
        addition: f64,
        chance: f64,
    },
}

impl VariableAmount {
    /// An amount that always yields `value`.
    pub fn fixed(value: f64) -> Result<Self> {
        non_negative("value", value)?;
        Ok(Self::Fixed { value })
    }

    /// A uniform range `[min, max)`.
    pub fn range(min: f64, max: f64) -> Result<Self> {
        non_negative("min", min)?;
        finite("max", max)?;
        if min > max {
            return Err(Error::invalid(
                "max",
                format!("must be >= min ({min}), got {max}"),
            ));
        }
        Ok(Self::Range { min, max })
    }

    /// A base value with a symmetric random variance.
    pub fn base_with_variance(base: f64, variance: f64) -> Result<Self> {
        check_variance(base, variance)?;
        Ok(Self::BaseWithVariance { base, variance })
    }

    /// A base value with a random non-negative addition.
    pub fn base_with_addition(base: f64, addition: f64) -> Result<Self> {
        non_negative("base", base)?;
        non_negative("addition", addition)?;
        Ok(Self::BaseWithAddition { base, addition })
    }

    /// A base value that receives a symmetric variance with probability `chance`.
    pub fn optional_variance(base: f64, variance: f64, chance: f64) -> Result<Self> {
        check_variance(base, variance)?;
        check_chance(chance)?;
        Ok(Self::OptionalVariance {
            base,
            variance,
            chance,
        })
    }

    /// A base value that receives a random addition with probability `chance`.
    pub fn optional_addition(base: f64, addition: f64, chance: f64) -> Result<Self> {
        non_negative("base", base)?;
        non_negative("addition", addition)?;
        check_chance(chance)?;
        Ok(Self::OptionalAddition {
            base,
            addition,
            chance,
        })
    }

    /// Variant tag and numbers as normalized bit patterns.
    fn key(&self) -> (u8, [u64; 3]) {
        match *self {
            Self::Fixed { value } => (0, [bits(value), 0, 0]),
            Self::Range { min, max } => (1, [bits(min), bits(max), 0]),
            Self::BaseWithVariance { base, variance } => (2, [bits(base), bits(variance), 0]),
            Self::BaseWithAddition { base, addition } => (3, [bits(base), bits(addition), 0]),
            Self::OptionalVariance {
                base,
                variance,
                chance,
            } => (4, [bits(base), bits(variance), bits(chance)]),
            Self::OptionalAddition {
                base,
                addition,
                chance,
            } => (5, [bits(base), bits(addition), bits(chance)]),
        }
    }
}

impl AmountSource for VariableAmount {
    fn minimum(&self) -> f64 {
        match *self {
            Self::Fixed { value } => value,
            Self::Range { min, .. } => min,
            Self::BaseWithVariance { base, variance }
            | Self::OptionalVariance { base, variance, .. } => base - variance,
            Self::BaseWithAddition { base, .. } | Self::OptionalAddition { base, .. } => base,
        }
    }

    fn maximum(&self) -> f64 {
        match *self {
            Self::Fixed { value } => value,
            Self::Range { max, .. } => max,
            Self::BaseWithVariance { base, variance }
            | Self::OptionalVariance { base, variance, .. } => base + variance,
            Self::BaseWithAddition { base, addition }
            | Self::OptionalAddition { base, addition, .. } => base + addition,
        }
    }

    fn amount(&self, rng: &mut dyn RngCore) -> f64 {
        match *self {
            Self::Fixed { value } => value,
            Self::Range { min, max } => {
                if min == max {
                    min
                } else {
                    min + rand01(rng) * (max - min)
                }
            }
            Self::BaseWithVariance { base, variance } => {
                base + variance * (2.0 * rand01(rng) - 1.0)
            }
            Self::BaseWithAddition { base, addition } => base + rand01(rng) * addition,
            Self::OptionalVariance {
                base,
                variance,
                chance,
            } => {
                if rand01(rng) < chance {
                    base + variance * (2.0 * rand01(rng) - 1.0)
                } else {
                    base
                }
            }
            Self::OptionalAddition {
                base,
                addition,
                chance,
            } => {
                if rand01(rng) < chance {
                    base + rand01(rng) * addition
                } else {
                    base
                }
            }
        }
    }
}

impl AmountSource for u32 {
    fn minimum(&self) -> f64 {
        f64::from(*self)
    }

    fn maximum(&self) -> f64 {
        f64::from(*self)
    }

    fn amount(&self, _rng: &mut dyn RngCore) -> f64 {
        f64::from(*self)
    }
}

impl From<u32> for VariableAmount {
    fn from(value: u32) -> Self {
        Self::Fixed {
            value: f64::from(value),
        }
    }
}

impl PartialEq for VariableAmount {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for VariableAmount {}

impl Hash for VariableAmount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for VariableAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fixed { value } => write!(f, "{value}"),
            Self::Range { min, max } => write!(f, "[{min}, {max})"),
            Self::BaseWithVariance { base, variance } => write!(f, "{base}±{variance}"),
            Self::BaseWithAddition { base, addition } => write!(f, "{base}+[0, {addition})"),
            Self::OptionalVariance {
                base,
                variance,
                chance,
            } => write!(f, "{base}±{variance} @{chance}"),
            Self::OptionalAddition {
                base,
                addition,
                chance,
            } => write!(f, "{base}+[0, {addition}) @{chance}"),
        }
    }
}

#[inline]
fn bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(name, format!("must be finite, got {value}")))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(Error::invalid(
            name,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

fn check_variance(base: f64, variance: f64) -> Result<()> {
    non_negative("base", base)?;
    non_negative("variance", variance)?;
    if variance > base {
        return Err(Error::invalid(
            "variance",
            format!("must not exceed base ({base}), got {variance}"),
        ));
    }
    Ok(())
}

fn check_chance(chance: f64) -> Result<()> {
    finite("chance", chance)?;
    if !(0.0..=1.0).contains(&chance) {
        return Err(Error::invalid(
            "chance",
            format!("must be within [0, 1], got {chance}"),
        ));
    }
    Ok(())
}

/// Unvalidated mirror of [`VariableAmount`] used as the deserialization entry point.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
enum RawAmount {
    Fixed {
        value: f64,
    },
    Range {
        min: f64,
        max: f64,
    },
    BaseWithVariance {
        base: f64,
        variance: f64,
    },
    BaseWithAddition {
        base: f64,
        addition: f64,
    },
    OptionalVariance {
        base: f64,
        variance: f64,
        chance: f64,
    },
    OptionalAddition {
        base: f64,
        addition: f64,
        chance: f64,
    },
}

#[cfg(feature = "serde")]
impl TryFrom<RawAmount> for VariableAmount {
    type Error = Error;

    fn try_from(raw: RawAmount) -> Result<Self> {
        match raw {
            RawAmount::Fixed { value } => Self::fixed(value),
            RawAmount::Range { min, max } => Self::range(min, max),
            RawAmount::BaseWithVariance { base, variance } => {
                Self::base_with_variance(base, variance)
            }
            RawAmount::BaseWithAddition { base, addition } => {
                Self::base_with_addition(base, addition)
            }
            RawAmount::OptionalVariance {
                base,
                variance,
                chance,
            } => Self::optional_variance(base, variance, chance),
            RawAmount::OptionalAddition {
                base,
                addition,
                chance,
            } => Self::optional_addition(base, addition, chance),
        }
    }
}
