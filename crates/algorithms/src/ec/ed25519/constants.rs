//! Curve constants for Ed25519, in 51-bit limb form

use super::field::FieldElement;

/// d = -121665/121666
pub const D: FieldElement = FieldElement([
    929955233495203,
    466365720129213,
    1662059464998953,
    2033849074728123,
    1442794654840575,
]);

/// 2·d
pub const D2: FieldElement = FieldElement([
    1859910466990425,
    932731440258426,
    1072319116312658,
    1815898335770999,
    633789495995903,
]);

/// sqrt(-1) = 2^((p-1)/4)
pub const SQRT_M1: FieldElement = FieldElement([
    1718705420411056,
    234908883556509,
    2233514472574048,
    2117202627021982,
    765476049583133,
]);

/// Affine x coordinate of the base point
pub(crate) const BASE_X: FieldElement = FieldElement([
    1738742601995546,
    1146398526822698,
    2070867633025821,
    562264141797630,
    587772402128613,
]);

/// Affine y coordinate of the base point (4/5)
pub(crate) const BASE_Y: FieldElement = FieldElement([
    1801439850948184,
    1351079888211148,
    450359962737049,
    900719925474099,
    1801439850948198,
]);

/// x·y of the base point
pub(crate) const BASE_T: FieldElement = FieldElement([
    1841354044333475,
    16398895984059,
    755974180946558,
    900171276175154,
    1821297809914039,
]);

/// Group order L = 2^252 + 27742317777372353535851937790883648493, little-endian
pub const CURVE_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58,
    0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// L as four little-endian 64-bit limbs
pub(crate) const L: [u64; 4] = [
    0x5812631a5cf5d3ed,
    0x14def9dea2f79cd6,
    0x0000000000000000,
    0x1000000000000000,
];
