use std::cmp::Ordering;
use std::fmt;

use crate::error::BoundsError;

/// What the filter does with a record whose quality and sequence lengths differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log a warning, drop the record and continue.
    Skip,
    /// Return the first error to the caller (strict).
    #[default]
    Return,
}

/// Closed interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    low: T,
    high: T,
}

impl<T> Bounds<T>
where
    T: PartialOrd + Copy + Default + fmt::Display,
{
    pub fn new(low: T, high: T) -> Result<Self, BoundsError> {
        match low.partial_cmp(&high) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { low, high }),
            // NaN lands here too
            _ => Err(BoundsError::Inverted {
                low: low.to_string(),
                high: high.to_string(),
            }),
        }
    }

    /// A single scalar means `[0, high]`.
    pub fn at_most(high: T) -> Result<Self, BoundsError> {
        Self::new(T::default(), high)
    }

    /// Command-line form: one value is an upper bound, two are `low high`.
    pub fn from_values(values: &[T]) -> Result<Self, BoundsError> {
        match *values {
            [high] => Self::at_most(high),
            [low, high] => Self::new(low, high),
            _ => Err(BoundsError::Arity(values.len())),
        }
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    pub fn low(&self) -> T {
        self.low
    }

    pub fn high(&self) -> T {
        self.high
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub gc: Bounds<f64>,
    pub length: Bounds<usize>,
    pub min_quality: f64,
    pub on_malformed: ErrorPolicy,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            gc: Bounds {
                low: 0.0,
                high: 100.0,
            },
            length: Bounds {
                low: 0,
                high: u32::MAX as usize,
            },
            min_quality: 0.0,
            on_malformed: ErrorPolicy::Return,
        }
    }
}
