//! Capability traits required by the list algorithms.
//!
//! Each algorithm states exactly what it needs from the element type:
//! - palindrome detection: `PartialEq` (value equality, never identity),
//! - zig-zag rearrangement: `Ord`,
//! - intersection detection: nothing (it compares node identity only),
//! - digit addition: [`Digit`].

/// An element type that can stand for one decimal digit.
///
/// Implementations convert losslessly for `0..=9`. Anything outside that
/// range is not rejected by the unchecked addition; the conversion simply
/// wraps (`as`-casts) and the resulting sum is meaningless. Use
/// [`Digit::is_decimal`] or the checked APIs when the input is untrusted.
pub trait Digit: Copy {
    /// Digit value as an unsigned integer; negative values wrap.
    fn to_digit(self) -> u32;

    /// Build the element from a digit (or an overflowing carry).
    fn from_digit(digit: u32) -> Self;

    /// Whether the element is a single decimal digit.
    ///
    /// Implementations must compare the full value, not the truncated
    /// [`to_digit`](Self::to_digit) result.
    fn is_decimal(self) -> bool;
}

macro_rules! impl_digit {
    ($($t:ty),* $(,)?) => {
        $(
            impl Digit for $t {
                #[inline]
                fn to_digit(self) -> u32 {
                    self as u32
                }

                #[inline]
                fn from_digit(digit: u32) -> Self {
                    digit as $t
                }

                // Checked in the native width; `to_digit` truncates.
                #[inline]
                fn is_decimal(self) -> bool {
                    (0..10).contains(&self)
                }
            }
        )*
    };
}

impl_digit!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
