//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are five 51-bit limbs. Limbs may exceed 51 bits between
//! operations; every operation that returns an element leaves each limb below
//! 2^52, which keeps the `u128` products in `mul` far from overflow.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use nemcrypt_internal::constant_time::ct_is_zero;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// 16·p, added before subtraction so limbs never underflow
const SIXTEEN_P: [u64; 5] = [
    36028797018963664,
    36028797018963952,
    36028797018963952,
    36028797018963952,
    36028797018963952,
];

/// Element of GF(2^255 - 19)
#[derive(Clone, Copy, Default, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 5]);

#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

#[inline(always)]
fn load8(input: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&input[..8]);
    u64::from_le_bytes(buf)
}

impl FieldElement {
    /// The additive identity
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);

    /// The multiplicative identity
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn one() -> Self {
        Self::ONE
    }

    /// Carry every limb into the next, folding the top carry back times 19
    #[inline(always)]
    fn reduce(mut limbs: [u64; 5]) -> FieldElement {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement(limbs)
    }

    /// Decode 32 little-endian bytes
    ///
    /// Bit 255 is ignored. Values in `[p, 2^255)` are accepted and behave as
    /// their reduction mod p.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        FieldElement([
            load8(&bytes[0..]) & LOW_51_BIT_MASK,
            (load8(&bytes[6..]) >> 3) & LOW_51_BIT_MASK,
            (load8(&bytes[12..]) >> 6) & LOW_51_BIT_MASK,
            (load8(&bytes[19..]) >> 1) & LOW_51_BIT_MASK,
            (load8(&bytes[24..]) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Canonical little-endian encoding, always in `[0, p)`
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut limbs = FieldElement::reduce(self.0).0;

        // q is 1 exactly when the value is >= p
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += 19 * q;

        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        // the carry out of the top limb is the 2^255 we subtract
        limbs[4] &= LOW_51_BIT_MASK;

        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut bits = 0u32;
        let mut idx = 0usize;
        for limb in limbs.iter() {
            acc |= (*limb as u128) << bits;
            bits += 51;
            while bits >= 8 {
                out[idx] = acc as u8;
                acc >>= 8;
                bits -= 8;
                idx += 1;
            }
        }
        out[idx] = acc as u8;
        out
    }

    pub fn add(&self, other: &FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &other.0;
        FieldElement::reduce([a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3], a[4] + b[4]])
    }

    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &other.0;
        FieldElement::reduce([
            (a[0] + SIXTEEN_P[0]) - b[0],
            (a[1] + SIXTEEN_P[1]) - b[1],
            (a[2] + SIXTEEN_P[2]) - b[2],
            (a[3] + SIXTEEN_P[3]) - b[3],
            (a[4] + SIXTEEN_P[4]) - b[4],
        ])
    }

    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &other.0;

        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];

        c1 += (c0 >> 51) as u64 as u128;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;

        c2 += (c1 >> 51) as u64 as u128;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;

        c3 += (c2 >> 51) as u64 as u128;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;

        c4 += (c3 >> 51) as u64 as u128;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;

        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement(out)
    }

    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// 2·self²
    pub fn square_and_double(&self) -> FieldElement {
        let sq = self.square();
        sq.add(&sq)
    }

    /// self^(2^k), k >= 1
    fn pow2k(&self, k: u32) -> FieldElement {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    pub fn negate(&self) -> FieldElement {
        FieldElement::ZERO.sub(self)
    }

    /// Returns (self^(2^250 - 1), self^11)
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        let t0 = self.square(); // 2
        let t1 = t0.square().square(); // 8
        let t2 = self.mul(&t1); // 9
        let t3 = t0.mul(&t2); // 11
        let t4 = t3.square(); // 22
        let t5 = t2.mul(&t4); // 2^5 - 1
        let t6 = t5.pow2k(5);
        let t7 = t6.mul(&t5); // 2^10 - 1
        let t8 = t7.pow2k(10);
        let t9 = t8.mul(&t7); // 2^20 - 1
        let t10 = t9.pow2k(20);
        let t11 = t10.mul(&t9); // 2^40 - 1
        let t12 = t11.pow2k(10);
        let t13 = t12.mul(&t7); // 2^50 - 1
        let t14 = t13.pow2k(50);
        let t15 = t14.mul(&t13); // 2^100 - 1
        let t16 = t15.pow2k(100);
        let t17 = t16.mul(&t15); // 2^200 - 1
        let t18 = t17.pow2k(50);
        let t19 = t18.mul(&t13); // 2^250 - 1

        (t19, t3)
    }

    /// Multiplicative inverse, self^(p-2)
    ///
    /// The inverse of zero is zero.
    pub fn invert(&self) -> FieldElement {
        let (t19, t3) = self.pow22501();
        // 2^255 - 32 + 11 = p - 2
        t19.pow2k(5).mul(&t3)
    }

    /// self^((p-5)/8) = self^(2^252 - 3), the core of square-root extraction
    pub fn pow22523(&self) -> FieldElement {
        let (t19, _) = self.pow22501();
        t19.pow2k(2).mul(self)
    }

    /// Low bit of the canonical encoding
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    pub fn is_non_zero(&self) -> bool {
        !ct_is_zero(&self.to_bytes())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(")?;
        for b in self.to_bytes().iter().rev() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

macro_rules! field_binop {
    ($trait:ident, $method:ident) => {
        impl<'a, 'b> $trait<&'b FieldElement> for &'a FieldElement {
            type Output = FieldElement;
            fn $method(self, rhs: &'b FieldElement) -> FieldElement {
                FieldElement::$method(self, rhs)
            }
        }
    };
}

field_binop!(Add, add);
field_binop!(Sub, sub);
field_binop!(Mul, mul);

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        self.negate()
    }
}
