//! A fixed-width damage mask stored in an unsigned integer.
//!
//! Each ship owns one mask whose width equals the ship's cell count. Bit `i`
//! tracks the cell `i` steps from the ship's origin: set means intact,
//! cleared means damaged. Bits are only ever cleared.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by condition constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// Requested width exceeds the number of bits in `T`.
    WidthTooLarge { width: usize, capacity: usize },
    /// A mask must cover at least one cell.
    ZeroWidth,
}

impl core::fmt::Display for ConditionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConditionError::WidthTooLarge { width, capacity } => {
                write!(f, "WidthTooLarge: width={} exceeds T::BITS={}", width, capacity)
            }
            ConditionError::ZeroWidth => write!(f, "ZeroWidth: a condition needs one bit"),
        }
    }
}

/// Damage mask of `width` low bits stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Condition<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    width: usize,
}

impl<T> Condition<T>
where
    T: PrimInt + Unsigned + Zero,
{
    const CAPACITY: usize = mem::size_of::<T>() * 8;

    #[inline]
    fn full_mask(width: usize) -> T {
        if width >= Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << width) - T::one()
        }
    }

    /// Fully intact mask with every one of the `width` low bits set.
    ///
    /// Widths beyond the capacity of `T` saturate to the full integer and a
    /// zero width is widened to one bit.
    pub fn intact(width: usize) -> Self {
        let width = width.clamp(1, Self::CAPACITY);
        Condition {
            bits: Self::full_mask(width),
            width,
        }
    }

    /// Fallible constructor: rejects widths of zero or above `T::BITS`.
    pub fn try_intact(width: usize) -> Result<Self, ConditionError> {
        if width == 0 {
            Err(ConditionError::ZeroWidth)
        } else if width > Self::CAPACITY {
            Err(ConditionError::WidthTooLarge {
                width,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(Self::intact(width))
        }
    }

    /// Number of cells covered by the mask.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raw mask value.
    pub fn bits(&self) -> T {
        self.bits
    }

    /// Clear the bit at `offset`, wrapped into `0..width`.
    pub fn clear(&mut self, offset: usize) {
        let offset = offset % self.width;
        self.bits = self.bits & !(T::one() << offset);
    }

    /// Whether the bit at `offset` (wrapped) is still set.
    pub fn is_intact_at(&self, offset: usize) -> bool {
        let offset = offset % self.width;
        ((self.bits >> offset) & T::one()) != T::zero()
    }

    /// Number of intact cells.
    pub fn intact_count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true once every bit has been cleared.
    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }
}

impl<T> fmt::Debug for Condition<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Condition(0b")?;
        for i in (0..self.width).rev() {
            let bit = if self.is_intact_at(i) { '1' } else { '0' };
            write!(f, "{}", bit)?;
        }
        write!(f, ")")
    }
}
