//! Edwards curve points in their different coordinate systems
//!
//! Every representation is its own struct, so the arithmetic that only makes
//! sense for one representation (for example adding a [`CachedPoint`] to an
//! [`ExtendedPoint`]) is only callable on that type. [`GroupElement`] is the
//! tagged sum over all of them, for code that needs to hold "a point in some
//! coordinate system" and convert on demand.
//!
//! | system      | coordinates                | meaning                               |
//! |-------------|----------------------------|---------------------------------------|
//! | AFFINE      | (x, y)                     | the point itself                      |
//! | P2          | (X, Y, Z)                  | x = X/Z, y = Y/Z                      |
//! | P3          | (X, Y, Z, T)               | x = X/Z, y = Y/Z, xy = T/Z            |
//! | P1xP1       | (X, Y, Z, T)               | x = X/Z, y = Y/T                      |
//! | PRECOMPUTED | (y+x, y-x, 2dxy)           | affine, ready for mixed addition      |
//! | CACHED      | (Y+X, Y-X, Z, 2dT)         | P3, ready for addition                |

use core::fmt;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::constants::{BASE_T, BASE_X, BASE_Y, D, D2, SQRT_M1};
use super::field::FieldElement;

/// Tag naming the coordinate system a [`GroupElement`] is held in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    Affine,
    P2,
    P3,
    P1xP1,
    Precomputed,
    Cached,
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordinateSystem::Affine => "AFFINE",
            CoordinateSystem::P2 => "P2",
            CoordinateSystem::P3 => "P3",
            CoordinateSystem::P1xP1 => "P1xP1",
            CoordinateSystem::Precomputed => "PRECOMPUTED",
            CoordinateSystem::Cached => "CACHED",
        };
        f.write_str(name)
    }
}

/// Compressed point representation (32 bytes)
///
/// Little-endian y with the sign of x in the top bit of the last byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedPoint(pub [u8; 32]);

/// Affine coordinates (x, y)
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    pub x: FieldElement,
    pub y: FieldElement,
}

/// Projective coordinates (X:Y:Z), the P2 system
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
}

/// Extended coordinates (X:Y:Z:T) with T = XY/Z, the P3 system
#[derive(Clone, Copy, Debug)]
pub struct ExtendedPoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
    pub t: FieldElement,
}

/// Completed coordinates ((X:Z), (Y:T)), the P1xP1 system
///
/// Output of every addition and doubling; convert before using further.
#[derive(Clone, Copy, Debug)]
pub struct CompletedPoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
    pub t: FieldElement,
}

/// (Y+X, Y-X, Z, 2dT), the right-hand operand of [`ExtendedPoint::add`]
#[derive(Clone, Copy, Debug)]
pub struct CachedPoint {
    pub y_plus_x: FieldElement,
    pub y_minus_x: FieldElement,
    pub z: FieldElement,
    pub t2d: FieldElement,
}

/// (y+x, y-x, 2dxy) of an affine point, the table entry format
#[derive(Clone, Copy, Debug)]
pub struct PrecomputedPoint {
    pub y_plus_x: FieldElement,
    pub y_minus_x: FieldElement,
    pub xy2d: FieldElement,
}

impl CompressedPoint {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Decompress to a point on the curve
    ///
    /// Returns `None` when no x satisfies the curve equation for the encoded y.
    /// Not constant time; only used on public data.
    pub fn decode(&self) -> Option<ExtendedPoint> {
        let y = FieldElement::from_bytes(&self.0);
        let yy = y.square();

        // u = y² - 1, v = d·y² + 1
        let u = yy.sub(&FieldElement::ONE);
        let v = yy.mul(&D).add(&FieldElement::ONE);

        // x = u·v³·(u·v⁷)^((p-5)/8)
        let v3 = v.square().mul(&v);
        let mut x = v3.square().mul(&v).mul(&u).pow22523();
        x = x.mul(&v3).mul(&u);

        let vxx = x.square().mul(&v);
        if vxx.sub(&u).is_non_zero() {
            if vxx.add(&u).is_non_zero() {
                return None;
            }
            x = x.mul(&SQRT_M1);
        }

        let sign = Choice::from(self.0[31] >> 7);
        x = FieldElement::conditional_select(&x, &x.negate(), x.is_negative() ^ sign);

        Some(ExtendedPoint {
            x,
            y,
            z: FieldElement::ONE,
            t: x.mul(&y),
        })
    }
}

impl fmt::Debug for CompressedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompressedPoint(")?;
        for b in self.0.iter() {
            write!(f, "{:02X}", b)?;
        }
        write!(f, ")")
    }
}

/// Pack affine coordinates: y with the sign of x in bit 255
fn encode_affine(x: &FieldElement, y: &FieldElement) -> CompressedPoint {
    let mut s = y.to_bytes();
    s[31] |= x.is_negative().unwrap_u8() << 7;
    CompressedPoint(s)
}

impl AffinePoint {
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }

    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::ONE,
        }
    }

    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            x: self.x,
            y: self.y,
            z: FieldElement::ONE,
            t: self.x.mul(&self.y),
        }
    }

    pub fn to_precomputed(&self) -> PrecomputedPoint {
        PrecomputedPoint {
            y_plus_x: self.y.add(&self.x),
            y_minus_x: self.y.sub(&self.x),
            xy2d: self.x.mul(&self.y).mul(&D2),
        }
    }

    pub fn encode(&self) -> CompressedPoint {
        encode_affine(&self.x, &self.y)
    }

    /// Checks -x² + y² = 1 + d·x²·y²
    pub fn satisfies_curve_equation(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = FieldElement::ONE.add(&D.mul(&xx).mul(&yy)).add(&xx);
        lhs.ct_eq(&yy).into()
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &AffinePoint) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ProjectivePoint {
    /// Identity element (0:1:1)
    pub fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            z: FieldElement::ONE,
        }
    }

    /// 2·self
    pub fn dbl(&self) -> CompletedPoint {
        let xx = self.x.square();
        let yy = self.y.square();
        let b = self.z.square_and_double();
        let aa = self.x.add(&self.y).square();
        let yy_plus_xx = yy.add(&xx);
        let yy_minus_xx = yy.sub(&xx);

        CompletedPoint {
            x: aa.sub(&yy_plus_xx),
            y: yy_plus_xx,
            z: yy_minus_xx,
            t: b.sub(&yy_minus_xx),
        }
    }

    pub fn to_affine(&self) -> AffinePoint {
        let recip = self.z.invert();
        AffinePoint {
            x: self.x.mul(&recip),
            y: self.y.mul(&recip),
        }
    }

    pub fn encode(&self) -> CompressedPoint {
        self.to_affine().encode()
    }
}

impl ExtendedPoint {
    /// Identity element (0:1:1:0)
    pub fn identity() -> Self {
        ExtendedPoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        }
    }

    /// The standard generator B
    pub fn base_point() -> Self {
        ExtendedPoint {
            x: BASE_X,
            y: BASE_Y,
            z: FieldElement::ONE,
            t: BASE_T,
        }
    }

    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    pub fn to_cached(&self) -> CachedPoint {
        CachedPoint {
            y_plus_x: self.y.add(&self.x),
            y_minus_x: self.y.sub(&self.x),
            z: self.z,
            t2d: self.t.mul(&D2),
        }
    }

    pub fn to_affine(&self) -> AffinePoint {
        self.to_projective().to_affine()
    }

    /// 2·self, ignoring T
    pub fn dbl(&self) -> CompletedPoint {
        self.to_projective().dbl()
    }

    /// self + q
    pub fn add(&self, q: &CachedPoint) -> CompletedPoint {
        let a = self.y.add(&self.x).mul(&q.y_plus_x);
        let b = self.y.sub(&self.x).mul(&q.y_minus_x);
        let c = q.t2d.mul(&self.t);
        let d = self.z.mul(&q.z);
        let d = d.add(&d);

        CompletedPoint {
            x: a.sub(&b),
            y: a.add(&b),
            z: d.add(&c),
            t: d.sub(&c),
        }
    }

    /// self - q
    pub fn subtract(&self, q: &CachedPoint) -> CompletedPoint {
        let a = self.y.add(&self.x).mul(&q.y_minus_x);
        let b = self.y.sub(&self.x).mul(&q.y_plus_x);
        let c = q.t2d.mul(&self.t);
        let d = self.z.mul(&q.z);
        let d = d.add(&d);

        CompletedPoint {
            x: a.sub(&b),
            y: a.add(&b),
            z: d.sub(&c),
            t: d.add(&c),
        }
    }

    /// self + q for an affine q in precomputed form
    pub fn precomputed_add(&self, q: &PrecomputedPoint) -> CompletedPoint {
        let a = self.y.add(&self.x).mul(&q.y_plus_x);
        let b = self.y.sub(&self.x).mul(&q.y_minus_x);
        let c = q.xy2d.mul(&self.t);
        let d = self.z.add(&self.z);

        CompletedPoint {
            x: a.sub(&b),
            y: a.add(&b),
            z: d.add(&c),
            t: d.sub(&c),
        }
    }

    /// self - q for an affine q in precomputed form
    pub fn precomputed_subtract(&self, q: &PrecomputedPoint) -> CompletedPoint {
        let a = self.y.add(&self.x).mul(&q.y_minus_x);
        let b = self.y.sub(&self.x).mul(&q.y_plus_x);
        let c = q.xy2d.mul(&self.t);
        let d = self.z.add(&self.z);

        CompletedPoint {
            x: a.sub(&b),
            y: a.add(&b),
            z: d.sub(&c),
            t: d.add(&c),
        }
    }

    /// -self, computed as identity - self
    pub fn negate(&self) -> ExtendedPoint {
        ExtendedPoint::identity()
            .subtract(&self.to_cached())
            .to_extended()
    }

    pub fn encode(&self) -> CompressedPoint {
        self.to_affine().encode()
    }

    pub fn satisfies_curve_equation(&self) -> bool {
        self.to_affine().satisfies_curve_equation()
    }
}

impl CompletedPoint {
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x.mul(&self.t),
            y: self.y.mul(&self.z),
            z: self.z.mul(&self.t),
        }
    }

    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            x: self.x.mul(&self.t),
            y: self.y.mul(&self.z),
            z: self.z.mul(&self.t),
            t: self.x.mul(&self.y),
        }
    }

    pub fn to_affine(&self) -> AffinePoint {
        self.to_projective().to_affine()
    }
}

impl CachedPoint {
    /// Identity element (1, 1, 1, 0)
    pub fn identity() -> Self {
        CachedPoint {
            y_plus_x: FieldElement::ONE,
            y_minus_x: FieldElement::ONE,
            z: FieldElement::ONE,
            t2d: FieldElement::ZERO,
        }
    }

    /// Recover x = (Y+X - (Y-X)) / 2Z and y = (Y+X + (Y-X)) / 2Z
    pub fn to_affine(&self) -> AffinePoint {
        let recip = self.z.add(&self.z).invert();
        AffinePoint {
            x: self.y_plus_x.sub(&self.y_minus_x).mul(&recip),
            y: self.y_plus_x.add(&self.y_minus_x).mul(&recip),
        }
    }
}

impl PrecomputedPoint {
    /// Identity element (1, 1, 0)
    pub fn identity() -> Self {
        PrecomputedPoint {
            y_plus_x: FieldElement::ONE,
            y_minus_x: FieldElement::ONE,
            xy2d: FieldElement::ZERO,
        }
    }

    /// -self: swap y+x with y-x and negate 2dxy
    pub fn negate(&self) -> PrecomputedPoint {
        PrecomputedPoint {
            y_plus_x: self.y_minus_x,
            y_minus_x: self.y_plus_x,
            xy2d: self.xy2d.negate(),
        }
    }

    pub fn to_affine(&self) -> AffinePoint {
        let recip = FieldElement::ONE.add(&FieldElement::ONE).invert();
        AffinePoint {
            x: self.y_plus_x.sub(&self.y_minus_x).mul(&recip),
            y: self.y_plus_x.add(&self.y_minus_x).mul(&recip),
        }
    }
}

impl ConditionallySelectable for PrecomputedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        PrecomputedPoint {
            y_plus_x: FieldElement::conditional_select(&a.y_plus_x, &b.y_plus_x, choice),
            y_minus_x: FieldElement::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            xy2d: FieldElement::conditional_select(&a.xy2d, &b.xy2d, choice),
        }
    }
}

macro_rules! affine_eq {
    ($($ty:ty),*) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    self.to_affine().ct_eq(&other.to_affine()).into()
                }
            }

            impl Eq for $ty {}
        )*
    };
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

affine_eq!(
    ProjectivePoint,
    ExtendedPoint,
    CompletedPoint,
    CachedPoint,
    PrecomputedPoint
);

/// A curve point in any one of the six coordinate systems
///
/// Operations that the algebra only defines for some systems panic on the
/// others; reaching one is a bug in the caller, never a property of input
/// data.
#[derive(Clone, Copy, Debug)]
pub enum GroupElement {
    Affine(AffinePoint),
    P2(ProjectivePoint),
    P3(ExtendedPoint),
    P1xP1(CompletedPoint),
    Precomputed(PrecomputedPoint),
    Cached(CachedPoint),
}

#[cold]
#[inline(never)]
fn unsupported(operation: &str, system: CoordinateSystem) -> ! {
    panic!("{} is not supported for {} points", operation, system)
}

impl GroupElement {
    pub fn affine(x: FieldElement, y: FieldElement) -> Self {
        GroupElement::Affine(AffinePoint { x, y })
    }

    pub fn p2(x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        GroupElement::P2(ProjectivePoint { x, y, z })
    }

    pub fn p3(x: FieldElement, y: FieldElement, z: FieldElement, t: FieldElement) -> Self {
        GroupElement::P3(ExtendedPoint { x, y, z, t })
    }

    pub fn p1xp1(x: FieldElement, y: FieldElement, z: FieldElement, t: FieldElement) -> Self {
        GroupElement::P1xP1(CompletedPoint { x, y, z, t })
    }

    pub fn precomputed(y_plus_x: FieldElement, y_minus_x: FieldElement, xy2d: FieldElement) -> Self {
        GroupElement::Precomputed(PrecomputedPoint {
            y_plus_x,
            y_minus_x,
            xy2d,
        })
    }

    pub fn cached(
        y_plus_x: FieldElement,
        y_minus_x: FieldElement,
        z: FieldElement,
        t2d: FieldElement,
    ) -> Self {
        GroupElement::Cached(CachedPoint {
            y_plus_x,
            y_minus_x,
            z,
            t2d,
        })
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        match self {
            GroupElement::Affine(_) => CoordinateSystem::Affine,
            GroupElement::P2(_) => CoordinateSystem::P2,
            GroupElement::P3(_) => CoordinateSystem::P3,
            GroupElement::P1xP1(_) => CoordinateSystem::P1xP1,
            GroupElement::Precomputed(_) => CoordinateSystem::Precomputed,
            GroupElement::Cached(_) => CoordinateSystem::Cached,
        }
    }

    /// Convert to `target`
    ///
    /// # Panics
    ///
    /// If the conversion is not one of AFFINE→{AFFINE, P2, P3}, P2→P2,
    /// P3→{P2, P3, CACHED}, P1xP1→{P2, P3, P1xP1}, PRECOMPUTED→PRECOMPUTED or
    /// CACHED→CACHED.
    pub fn to_coordinate_system(&self, target: CoordinateSystem) -> GroupElement {
        use CoordinateSystem as Cs;

        match (self, target) {
            (GroupElement::Affine(p), Cs::Affine) => GroupElement::Affine(*p),
            (GroupElement::Affine(p), Cs::P2) => GroupElement::P2(p.to_projective()),
            (GroupElement::Affine(p), Cs::P3) => GroupElement::P3(p.to_extended()),
            (GroupElement::P2(p), Cs::P2) => GroupElement::P2(*p),
            (GroupElement::P3(p), Cs::P2) => GroupElement::P2(p.to_projective()),
            (GroupElement::P3(p), Cs::P3) => GroupElement::P3(*p),
            (GroupElement::P3(p), Cs::Cached) => GroupElement::Cached(p.to_cached()),
            (GroupElement::P1xP1(p), Cs::P2) => GroupElement::P2(p.to_projective()),
            (GroupElement::P1xP1(p), Cs::P3) => GroupElement::P3(p.to_extended()),
            (GroupElement::P1xP1(p), Cs::P1xP1) => GroupElement::P1xP1(*p),
            (GroupElement::Precomputed(p), Cs::Precomputed) => GroupElement::Precomputed(*p),
            (GroupElement::Cached(p), Cs::Cached) => GroupElement::Cached(*p),
            (_, target) => panic!(
                "cannot convert a {} point to {}",
                self.coordinate_system(),
                target
            ),
        }
    }

    pub fn to_p2(&self) -> GroupElement {
        self.to_coordinate_system(CoordinateSystem::P2)
    }

    pub fn to_p3(&self) -> GroupElement {
        self.to_coordinate_system(CoordinateSystem::P3)
    }

    pub fn to_cached(&self) -> GroupElement {
        self.to_coordinate_system(CoordinateSystem::Cached)
    }

    /// The P3 representation, converting if the system allows it
    pub fn as_extended(&self) -> ExtendedPoint {
        match self.to_p3() {
            GroupElement::P3(p) => p,
            other => unsupported("as_extended", other.coordinate_system()),
        }
    }

    /// Normalized affine coordinates, defined for every system
    pub fn to_affine(&self) -> AffinePoint {
        match self {
            GroupElement::Affine(p) => *p,
            GroupElement::P2(p) => p.to_affine(),
            GroupElement::P3(p) => p.to_affine(),
            GroupElement::P1xP1(p) => p.to_affine(),
            GroupElement::Precomputed(p) => p.to_affine(),
            GroupElement::Cached(p) => p.to_affine(),
        }
    }

    /// 2·self as a P1xP1 point; P2 and P3 only
    pub fn dbl(&self) -> GroupElement {
        match self {
            GroupElement::P2(p) => GroupElement::P1xP1(p.dbl()),
            GroupElement::P3(p) => GroupElement::P1xP1(p.dbl()),
            _ => unsupported("dbl", self.coordinate_system()),
        }
    }

    /// self + q for P3 self and CACHED q
    pub fn add(&self, q: &GroupElement) -> GroupElement {
        match (self, q) {
            (GroupElement::P3(p), GroupElement::Cached(q)) => GroupElement::P1xP1(p.add(q)),
            (GroupElement::P3(_), _) => unsupported("add", q.coordinate_system()),
            _ => unsupported("add", self.coordinate_system()),
        }
    }

    /// self - q for P3 self and CACHED q
    pub fn subtract(&self, q: &GroupElement) -> GroupElement {
        match (self, q) {
            (GroupElement::P3(p), GroupElement::Cached(q)) => GroupElement::P1xP1(p.subtract(q)),
            (GroupElement::P3(_), _) => unsupported("subtract", q.coordinate_system()),
            _ => unsupported("subtract", self.coordinate_system()),
        }
    }

    /// self + q for P3 self and PRECOMPUTED q
    pub fn precomputed_add(&self, q: &GroupElement) -> GroupElement {
        match (self, q) {
            (GroupElement::P3(p), GroupElement::Precomputed(q)) => {
                GroupElement::P1xP1(p.precomputed_add(q))
            }
            (GroupElement::P3(_), _) => unsupported("precomputed_add", q.coordinate_system()),
            _ => unsupported("precomputed_add", self.coordinate_system()),
        }
    }

    /// self - q for P3 self and PRECOMPUTED q
    pub fn precomputed_subtract(&self, q: &GroupElement) -> GroupElement {
        match (self, q) {
            (GroupElement::P3(p), GroupElement::Precomputed(q)) => {
                GroupElement::P1xP1(p.precomputed_subtract(q))
            }
            (GroupElement::P3(_), _) => unsupported("precomputed_subtract", q.coordinate_system()),
            _ => unsupported("precomputed_subtract", self.coordinate_system()),
        }
    }

    /// -self; P3 only
    pub fn negate(&self) -> GroupElement {
        match self {
            GroupElement::P3(p) => GroupElement::P3(p.negate()),
            _ => unsupported("negate", self.coordinate_system()),
        }
    }

    pub fn encode(&self) -> CompressedPoint {
        self.to_affine().encode()
    }

    pub fn satisfies_curve_equation(&self) -> bool {
        self.to_affine().satisfies_curve_equation()
    }
}

impl PartialEq for GroupElement {
    fn eq(&self, other: &Self) -> bool {
        self.to_affine() == other.to_affine()
    }
}

impl Eq for GroupElement {}

impl From<AffinePoint> for GroupElement {
    fn from(p: AffinePoint) -> Self {
        GroupElement::Affine(p)
    }
}

impl From<ProjectivePoint> for GroupElement {
    fn from(p: ProjectivePoint) -> Self {
        GroupElement::P2(p)
    }
}

impl From<ExtendedPoint> for GroupElement {
    fn from(p: ExtendedPoint) -> Self {
        GroupElement::P3(p)
    }
}

impl From<CompletedPoint> for GroupElement {
    fn from(p: CompletedPoint) -> Self {
        GroupElement::P1xP1(p)
    }
}

impl From<PrecomputedPoint> for GroupElement {
    fn from(p: PrecomputedPoint) -> Self {
        GroupElement::Precomputed(p)
    }
}

impl From<CachedPoint> for GroupElement {
    fn from(p: CachedPoint) -> Self {
        GroupElement::Cached(p)
    }
}
