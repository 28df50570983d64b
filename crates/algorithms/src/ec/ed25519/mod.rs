//! Ed25519 arithmetic
//!
//! The curve is the twisted Edwards curve -x² + y² = 1 + d·x²·y² over
//! GF(2^255 - 19) with d = -121665/121666. Points live in several coordinate
//! systems (see [`CoordinateSystem`]); each arithmetic step takes and returns
//! the system that makes it cheapest.
//!
//! Secret scalars go through [`PreparedPoint::scalar_multiply`], which is
//! constant time. [`PreparedPoint::double_scalar_multiply_variable_time`] is
//! only for public scalars.

mod constants;
mod field;
mod group;
mod scalar;
mod table;
mod vartime;

pub use constants::{CURVE_ORDER, D, D2, SQRT_M1};
pub use field::FieldElement;
pub use group::{
    AffinePoint, CachedPoint, CompletedPoint, CompressedPoint, CoordinateSystem, ExtendedPoint,
    GroupElement, PrecomputedPoint, ProjectivePoint,
};
pub use scalar::Scalar;
pub use table::{DoubleScalarTable, PreparedPoint, SingleScalarTable, BASE_POINT};
