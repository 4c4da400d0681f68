//! BN254 (alt_bn128) curve operations used to build an operator's BLS
//! proof-of-possession for an EVM registry contract.
//!
//! # Supported Operations
//!
//! - **Scalar Multiplication** (G1 & G2).
//! - **Validation**: On-curve and subgroup checks.
//! - **Decoding**: Decimal literals and big integers into base field elements.
//! - **Pairing**: Product-of-pairings check (`∏ e(P_i, Q_i) == 1`).
//!
//! # Encoding
//!
//! Points are serialized the way the EVM `ecAdd`, `ecMul` and `ecPairing`
//! precompiles ([EIP-196], [EIP-197]) read them: every base field element is a
//! 32-byte big-endian word, and each `Fq2` coordinate `c0 + c1 * u` is written
//! imaginary part first, i.e. `(c1, c0)`.
//!
//! [EIP-196]: https://eips.ethereum.org/EIPS/eip-196
//! [EIP-197]: https://eips.ethereum.org/EIPS/eip-197

pub use crate::{
    decoding::{
        bigint_from_decimal, biguint_from_decimal, fq_from_biguint, fq_from_decimal,
        fr_from_bigint, fr_from_biguint, g1_point_from_coordinates, DecodeError,
    },
    encoding::{
        be_word, fq_to_be_word, PodG1Point, PodG2Point, FQ2_SIZE, FQ_SIZE, G1_UNCOMPRESSED_SIZE,
        G2_UNCOMPRESSED_SIZE,
    },
    generators::{G1_GENERATOR, G2_GENERATOR},
    multiplication::{bn254_g1_multiplication, bn254_g2_multiplication},
    pairing::bn254_pairing_check,
    validation::{bn254_g1_point_validation, bn254_g2_point_validation},
};
pub use ark_bn254::{Fq, Fq2, Fr, G1Affine, G2Affine};

pub(crate) mod decoding;
pub(crate) mod encoding;
pub(crate) mod generators;
pub(crate) mod multiplication;
pub(crate) mod pairing;
pub(crate) mod validation;
