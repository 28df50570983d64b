//! Scalar arithmetic modulo L = 2^252 + 27742317777372353535851937790883648493
//!
//! Reductions are bit-serial: shift the remainder left, bring in the next bit,
//! and subtract L under a mask. Slow next to a Barrett reduction, but every
//! iteration does the same work whatever the input.

use core::fmt;

use nemcrypt_internal::constant_time::{ct_eq, ct_is_zero, ct_mask_u64};
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::constants::L;

/// A 256-bit little-endian scalar
///
/// Values built with [`Scalar::from_bits`] are not reduced; the clamped
/// private scalar is used that way. Everything else is reduced mod L.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar {
    pub(crate) bytes: [u8; 32],
}

fn to_limbs<const N: usize>(bytes: &[u8]) -> [u64; N] {
    let mut limbs = [0u64; N];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(buf);
    }
    limbs
}

fn from_limbs(limbs: &[u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    out
}

/// r - L and the final borrow (1 when r < L)
#[inline(always)]
fn sub_l(r: &[u64; 4]) -> ([u64; 4], u64) {
    let mut out = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d1, b1) = r[i].overflowing_sub(L[i]);
        let (d2, b2) = d1.overflowing_sub(borrow);
        out[i] = d2;
        borrow = (b1 | b2) as u64;
    }
    (out, borrow)
}

/// Reduce a 512-bit little-endian value mod L
fn reduce_wide(input: &[u64; 8]) -> [u64; 4] {
    let mut r = [0u64; 4];

    for i in (0..512).rev() {
        let bit = (input[i / 64] >> (i % 64)) & 1;

        // r < L < 2^253, so 2r + 1 still fits in 256 bits
        r[3] = (r[3] << 1) | (r[2] >> 63);
        r[2] = (r[2] << 1) | (r[1] >> 63);
        r[1] = (r[1] << 1) | (r[0] >> 63);
        r[0] = (r[0] << 1) | bit;

        let (diff, borrow) = sub_l(&r);
        let keep = ct_mask_u64(Choice::from(borrow as u8));
        for j in 0..4 {
            r[j] = (r[j] & keep) | (diff[j] & !keep);
        }
    }

    r
}

impl Scalar {
    /// The scalar 0
    pub fn zero() -> Self {
        Scalar { bytes: [0u8; 32] }
    }

    /// Wrap 32 bytes as they are, without reducing mod L
    pub fn from_bits(bytes: [u8; 32]) -> Self {
        Scalar { bytes }
    }

    /// Reduce a 32-byte little-endian value mod L
    pub fn from_bytes_mod_order(bytes: &[u8; 32]) -> Self {
        let mut wide = [0u64; 8];
        wide[..4].copy_from_slice(&to_limbs::<4>(bytes));
        let mut reduced = reduce_wide(&wide);
        let scalar = Scalar {
            bytes: from_limbs(&reduced),
        };
        wide.zeroize();
        reduced.zeroize();
        scalar
    }

    /// Reduce a 64-byte little-endian value (a hash output) mod L
    pub fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        let mut wide = to_limbs::<8>(bytes);
        let mut reduced = reduce_wide(&wide);
        let scalar = Scalar {
            bytes: from_limbs(&reduced),
        };
        wide.zeroize();
        reduced.zeroize();
        scalar
    }

    /// (a·b + c) mod L
    ///
    /// Inputs need not be reduced; a·b + c must stay below 2^512, which
    /// holds for any operand below 2^255.
    pub fn mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        let a = to_limbs::<4>(&a.bytes);
        let b = to_limbs::<4>(&b.bytes);
        let c = to_limbs::<4>(&c.bytes);

        let mut t = [0u64; 8];
        for i in 0..4 {
            let mut carry: u128 = 0;
            for j in 0..4 {
                let v = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
                t[i + j] = v as u64;
                carry = v >> 64;
            }
            t[i + 4] = carry as u64;
        }

        let mut carry = 0u64;
        for (i, limb) in t.iter_mut().enumerate() {
            let addend = if i < 4 { c[i] } else { 0 };
            let (s1, o1) = limb.overflowing_add(addend);
            let (s2, o2) = s1.overflowing_add(carry);
            *limb = s2;
            carry = (o1 | o2) as u64;
        }

        let mut reduced = reduce_wide(&t);
        let scalar = Scalar {
            bytes: from_limbs(&reduced),
        };
        t.zeroize();
        reduced.zeroize();
        scalar
    }

    /// True iff 0 < s < L for the little-endian encoding `s`
    pub fn is_canonical(bytes: &[u8; 32]) -> bool {
        let (_, borrow) = sub_l(&to_limbs::<4>(bytes));
        borrow == 1 && !ct_is_zero(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Signed radix-16 digits e[0..64], sum e[i]·16^i = self
    ///
    /// e[0..63] lie in [-8, 7] and e[63] in [-8, 8]. Requires the top bit of
    /// the scalar to be clear, which holds for clamped and reduced scalars.
    pub fn to_radix16(&self) -> [i8; 64] {
        debug_assert!(self.bytes[31] <= 127);

        let mut e = [0i8; 64];
        for (i, byte) in self.bytes.iter().enumerate() {
            e[2 * i] = (byte & 15) as i8;
            e[2 * i + 1] = ((byte >> 4) & 15) as i8;
        }

        let mut carry = 0i8;
        for digit in e.iter_mut().take(63) {
            *digit += carry;
            carry = (*digit + 8) >> 4;
            *digit -= carry << 4;
        }
        e[63] += carry;

        e
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.bytes, other.bytes)
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar[REDACTED]")
    }
}
