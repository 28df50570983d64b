//! Variable-time multiplication for public scalars
//!
//! Nothing in this module may see a secret. The recoding branches on scalar
//! bits and the main loop skips zero digits, so timing reveals the scalars.
//! Signature verification is the only caller.

use super::group::ProjectivePoint;
use super::scalar::Scalar;
use super::table::PreparedPoint;

impl Scalar {
    /// Sliding-window non-adjacent form with window width up to 7 bits
    ///
    /// Every digit is zero or odd in [-15, 15], and the digits satisfy
    /// sum r[i]·2^i = self.
    pub fn non_adjacent_form(&self) -> [i8; 256] {
        let mut r = [0i8; 256];
        for (i, digit) in r.iter_mut().enumerate() {
            *digit = ((self.bytes[i >> 3] >> (i & 7)) & 1) as i8;
        }

        for i in 0..256 {
            if r[i] == 0 {
                continue;
            }

            let mut b = 1;
            while b <= 6 && i + b < 256 {
                if r[i + b] != 0 {
                    let shifted = (r[i + b] as i32) << b;
                    let current = r[i] as i32;

                    if current + shifted <= 15 {
                        r[i] = (current + shifted) as i8;
                        r[i + b] = 0;
                    } else if current - shifted >= -15 {
                        r[i] = (current - shifted) as i8;
                        // propagate the borrowed 2^(i+b) upwards
                        for k in (i + b)..256 {
                            if r[k] == 0 {
                                r[k] = 1;
                                break;
                            }
                            r[k] = 0;
                        }
                    } else {
                        break;
                    }
                }
                b += 1;
            }
        }

        r
    }
}

impl PreparedPoint {
    /// `b·self - a·other`, for public `a` and `b` only
    ///
    /// Both points' double-scalar tables are built if missing.
    pub fn double_scalar_multiply_variable_time(
        &self,
        other: &PreparedPoint,
        a: &Scalar,
        b: &Scalar,
    ) -> ProjectivePoint {
        let a_slide = a.non_adjacent_form();
        let b_slide = b.non_adjacent_form();

        let a_table = other.precompute_for_double_scalar_multiplication();
        let b_table = self.precompute_for_double_scalar_multiplication();

        let mut r = ProjectivePoint::identity();

        let top = match (0..256).rev().find(|&i| a_slide[i] != 0 || b_slide[i] != 0) {
            Some(top) => top,
            None => return r,
        };

        for i in (0..=top).rev() {
            let mut t = r.dbl();

            let ai = a_slide[i];
            if ai > 0 {
                t = t
                    .to_extended()
                    .precomputed_subtract(&a_table[(ai / 2) as usize]);
            } else if ai < 0 {
                t = t
                    .to_extended()
                    .precomputed_add(&a_table[(-ai / 2) as usize]);
            }

            let bi = b_slide[i];
            if bi > 0 {
                t = t
                    .to_extended()
                    .precomputed_add(&b_table[(bi / 2) as usize]);
            } else if bi < 0 {
                t = t
                    .to_extended()
                    .precomputed_subtract(&b_table[(-bi / 2) as usize]);
            }

            r = t.to_projective();
        }

        r
    }
}
