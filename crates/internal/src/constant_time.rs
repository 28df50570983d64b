//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Slices of different length compare unequal without inspecting their contents.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Returns true if every byte of `bytes` is zero
///
/// All bytes are folded together before the single comparison.
pub fn ct_is_zero(bytes: &[u8]) -> bool {
    let acc = bytes.iter().fold(0u8, |acc, b| acc | b);
    acc.ct_eq(&0).into()
}

/// Constant-time selection
///
/// Returns `a` if `condition` is false, `b` if `condition` is true.
pub fn ct_select<T>(a: T, b: T, condition: bool) -> T
where
    T: ConditionallySelectable,
{
    let choice = Choice::from(condition as u8);
    T::conditional_select(&a, &b, choice)
}

/// Constant-time conditional assignment
///
/// Sets `dst` to `src` if `condition` is true, otherwise leaves `dst` unchanged.
pub fn ct_assign(dst: &mut [u8], src: &[u8], condition: bool) {
    assert_eq!(dst.len(), src.len());

    let choice = Choice::from(condition as u8);

    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.conditional_assign(s, choice);
    }
}

/// Choice that is set when the two small digits are equal
///
/// Used by table lookups that must touch every entry.
#[inline]
pub fn ct_eq_digit(a: u8, b: u8) -> Choice {
    let x = a ^ b;
    // x == 0 iff (x - 1) borrows into the top bit of a u32
    let y = (x as u32).wrapping_sub(1) >> 31;
    Choice::from(y as u8)
}

/// Choice that is set when the signed digit is negative
#[inline]
pub fn ct_is_negative(digit: i8) -> Choice {
    Choice::from(((digit as u8) >> 7) & 1)
}

/// Absolute value of a signed digit without branching
#[inline]
pub fn ct_abs(digit: i8) -> u8 {
    let negative = ct_is_negative(digit);
    let mask = (negative.unwrap_u8() as i8).wrapping_neg();
    (digit.wrapping_sub((digit & mask) << 1)) as u8
}

/// Build an all-ones `u64` mask from a Choice, or all zeros
#[inline]
pub fn ct_mask_u64(choice: Choice) -> u64 {
    (choice.unwrap_u8() as u64).wrapping_neg()
}

/// Trait for types that can be compared in constant time
pub trait ConstantTimeEquals {
    /// Compare two values in constant time
    fn ct_equals(&self, other: &Self) -> bool;
}

impl<T: AsRef<[u8]>> ConstantTimeEquals for T {
    fn ct_equals(&self, other: &Self) -> bool {
        ct_eq(self.as_ref(), other.as_ref())
    }
}
