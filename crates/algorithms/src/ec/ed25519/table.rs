//! Precomputed multiples and constant-time scalar multiplication
//!
//! A [`PreparedPoint`] carries a point together with the two tables the
//! multiplication routines need. Each table is built on first use, at most
//! once, behind a `OnceCell`; concurrent first callers block on the same
//! initialization rather than racing.

use core::fmt;

use nemcrypt_internal::constant_time::{ct_abs, ct_eq_digit, ct_is_negative};
use once_cell::sync::{Lazy, OnceCell};
use subtle::ConditionallySelectable;
use tracing::trace;
use zeroize::Zeroize;

use super::group::{ExtendedPoint, PrecomputedPoint};
use super::scalar::Scalar;

/// `table[i][j] = (j + 1)·256^i·P`
pub type SingleScalarTable = [[PrecomputedPoint; 8]; 32];

/// `table[i] = (2i + 1)·P`
pub type DoubleScalarTable = [PrecomputedPoint; 8];

/// The Ed25519 base point, shared process-wide
pub static BASE_POINT: Lazy<PreparedPoint> =
    Lazy::new(|| PreparedPoint::new(ExtendedPoint::base_point()));

/// A point with lazily built multiplication tables
pub struct PreparedPoint {
    point: ExtendedPoint,
    single: OnceCell<Box<SingleScalarTable>>,
    double: OnceCell<DoubleScalarTable>,
}

impl PreparedPoint {
    pub fn new(point: ExtendedPoint) -> Self {
        Self {
            point,
            single: OnceCell::new(),
            double: OnceCell::new(),
        }
    }

    pub fn point(&self) -> &ExtendedPoint {
        &self.point
    }

    pub fn is_precomputed_for_scalar_multiplication(&self) -> bool {
        self.single.get().is_some()
    }

    pub fn is_precomputed_for_double_scalar_multiplication(&self) -> bool {
        self.double.get().is_some()
    }

    /// Table for [`scalar_multiply`](Self::scalar_multiply); built on the first call
    pub fn precompute_for_scalar_multiplication(&self) -> &SingleScalarTable {
        self.single.get_or_init(|| {
            trace!("building single scalar multiplication table");
            Box::new(build_single_table(&self.point))
        })
    }

    /// Table for the variable-time double multiplication; built on the first call
    pub fn precompute_for_double_scalar_multiplication(&self) -> &DoubleScalarTable {
        self.double.get_or_init(|| {
            trace!("building double scalar multiplication table");
            build_double_table(&self.point)
        })
    }

    /// `b·256^pos·P` for a digit `b` in [-8, 8], read in constant time
    ///
    /// Every one of the eight entries in row `pos` is visited and
    /// conditionally moved into the result.
    ///
    /// # Panics
    ///
    /// If `b` matched no entry. Only a malformed recoding can cause that.
    pub fn select(&self, pos: usize, b: i8) -> PrecomputedPoint {
        let row = &self.precompute_for_scalar_multiplication()[pos];

        let negative = ct_is_negative(b);
        let magnitude = ct_abs(b);

        let mut t = PrecomputedPoint::identity();
        let mut found = ct_eq_digit(magnitude, 0);
        for (j, entry) in row.iter().enumerate() {
            let hit = ct_eq_digit(magnitude, (j + 1) as u8);
            t.conditional_assign(entry, hit);
            found |= hit;
        }
        assert!(
            bool::from(found),
            "table lookup matched no entry at position {}",
            pos
        );

        let minus_t = t.negate();
        t.conditional_assign(&minus_t, negative);
        t
    }

    /// `a·P` in constant time
    ///
    /// `a` must have its top bit clear. The odd radix-16 digits are added
    /// first, the sum multiplied by 16, then the even digits are added.
    pub fn scalar_multiply(&self, a: &Scalar) -> ExtendedPoint {
        let mut e = a.to_radix16();

        let mut h = ExtendedPoint::identity();
        for i in (1..64).step_by(2) {
            h = h.precomputed_add(&self.select(i / 2, e[i])).to_extended();
        }

        h = h
            .dbl()
            .to_projective()
            .dbl()
            .to_projective()
            .dbl()
            .to_projective()
            .dbl()
            .to_extended();

        for i in (0..64).step_by(2) {
            h = h.precomputed_add(&self.select(i / 2, e[i])).to_extended();
        }

        e.zeroize();
        h
    }
}

impl From<ExtendedPoint> for PreparedPoint {
    fn from(point: ExtendedPoint) -> Self {
        PreparedPoint::new(point)
    }
}

impl fmt::Debug for PreparedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedPoint")
            .field("point", &self.point.encode())
            .field("single", &self.is_precomputed_for_scalar_multiplication())
            .field("double", &self.is_precomputed_for_double_scalar_multiplication())
            .finish()
    }
}

fn build_single_table(point: &ExtendedPoint) -> SingleScalarTable {
    let mut table = [[PrecomputedPoint::identity(); 8]; 32];
    let mut bi = *point;

    for row in table.iter_mut() {
        let bi_cached = bi.to_cached();
        let mut bij = bi;
        for entry in row.iter_mut() {
            *entry = bij.to_affine().to_precomputed();
            bij = bij.add(&bi_cached).to_extended();
        }
        // 256·bi
        for _ in 0..8 {
            bi = bi.dbl().to_extended();
        }
    }

    table
}

fn build_double_table(point: &ExtendedPoint) -> DoubleScalarTable {
    let mut table = [PrecomputedPoint::identity(); 8];
    let two_p = point.dbl().to_extended().to_cached();
    let mut bi = *point;

    for entry in table.iter_mut() {
        *entry = bi.to_affine().to_precomputed();
        bi = bi.add(&two_p).to_extended();
    }

    table
}
