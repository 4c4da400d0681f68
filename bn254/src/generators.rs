use {
    ark_bn254::{Fq, Fq2, G1Affine, G2Affine},
    ark_ff::MontFp,
};

const G1_GENERATOR_X: Fq = MontFp!("1");
const G1_GENERATOR_Y: Fq = MontFp!("2");

const G2_GENERATOR_X_C0: Fq =
    MontFp!("10857046999023057135944570762232829481370756359578518086990519993285655852781");
const G2_GENERATOR_X_C1: Fq =
    MontFp!("11559732032986387107991004021392285783925812861821192530917403151452391805634");
const G2_GENERATOR_Y_C0: Fq =
    MontFp!("8495653923123431417604973247489272438418190587263600148770280649306958101930");
const G2_GENERATOR_Y_C1: Fq =
    MontFp!("4082367875863433681332203403145435568316851327593401208105741076214120093531");

/// Generator of G1: `(1, 2)`.
pub const G1_GENERATOR: G1Affine = G1Affine::new_unchecked(G1_GENERATOR_X, G1_GENERATOR_Y);

/// Generator of G2.
///
/// Coordinates are held in `(c0, c1)` order, the reverse of the order the EVM
/// pairing precompile reads them in.
pub const G2_GENERATOR: G2Affine = G2Affine::new_unchecked(
    Fq2::new(G2_GENERATOR_X_C0, G2_GENERATOR_X_C1),
    Fq2::new(G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1),
);
