use {
    crate::decoding::fq_from_canonical,
    ark_bn254::{Fq, Fq2, G1Affine, G2Affine},
    ark_ec::AffineRepr,
    ark_ff::PrimeField,
    bytemuck_derive::{Pod, Zeroable},
    num_bigint::BigUint,
};

/// Size of a base field element (`Fq`) in bytes, one EVM word.
pub const FQ_SIZE: usize = 32;
/// Size of a quadratic extension field element (`Fq2`) in bytes.
pub const FQ2_SIZE: usize = 2 * FQ_SIZE;

/// G1 affine point size.
/// G1 = x (32) + y (32) = 64 bytes.
pub const G1_UNCOMPRESSED_SIZE: usize = 2 * FQ_SIZE;

/// G2 affine point size.
/// G2 = x (64) + y (64) = 128 bytes.
pub const G2_UNCOMPRESSED_SIZE: usize = 2 * FQ2_SIZE;

/// G1 affine point (64 bytes) as the EVM reads it: `x | y`, both big-endian.
///
/// The point at infinity is encoded as `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct PodG1Point(pub [u8; G1_UNCOMPRESSED_SIZE]);

impl PodG1Point {
    pub fn from_affine(point: &G1Affine) -> Self {
        let mut out = [0u8; G1_UNCOMPRESSED_SIZE];
        if !point.is_zero() {
            let (x, y) = out.split_at_mut(FQ_SIZE);
            x.copy_from_slice(&fq_to_be_word(&point.x));
            y.copy_from_slice(&fq_to_be_word(&point.y));
        }
        Self(out)
    }

    /// Deserializes to an affine point with full validation.
    ///
    /// Checks: Field validity, Curve equation (`y^2 = x^3 + 3`), Subgroup membership.
    pub fn to_affine(&self) -> Option<G1Affine> {
        if self.0.iter().all(|byte| *byte == 0) {
            return Some(G1Affine::zero());
        }
        let (x, y) = self.0.split_at(FQ_SIZE);
        let point = G1Affine::new_unchecked(fq_from_be_word(x)?, fq_from_be_word(y)?);
        (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()).then_some(point)
    }

    /// Lowercase hex of all 64 bytes, without a `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(bytemuck::bytes_of(self))
    }
}

/// G2 affine point (128 bytes) as the EVM reads it:
/// `x.c1 | x.c0 | y.c1 | y.c0`, all big-endian.
///
/// The point at infinity is encoded as all zeros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct PodG2Point(pub [u8; G2_UNCOMPRESSED_SIZE]);

impl PodG2Point {
    pub fn from_affine(point: &G2Affine) -> Self {
        let mut out = [0u8; G2_UNCOMPRESSED_SIZE];
        if !point.is_zero() {
            // written in (c0, c1) order first, then swapped into the EVM layout
            let words = [point.x.c0, point.x.c1, point.y.c0, point.y.c1];
            for (chunk, word) in out.chunks_exact_mut(FQ_SIZE).zip(words.iter()) {
                chunk.copy_from_slice(&fq_to_be_word(word));
            }
            swap_fq2_c0_c1(&mut out);
        }
        Self(out)
    }

    /// Deserializes to an affine point with full validation.
    ///
    /// Checks: Field validity, Curve equation (`y^2 = x^3 + 3/(9+u)`), Subgroup membership.
    pub fn to_affine(&self) -> Option<G2Affine> {
        if self.0.iter().all(|byte| *byte == 0) {
            return Some(G2Affine::zero());
        }
        let mut bytes = self.0;
        swap_fq2_c0_c1(&mut bytes);
        let mut words = bytes.chunks_exact(FQ_SIZE).map(fq_from_be_word);
        let x = Fq2::new(words.next()??, words.next()??);
        let y = Fq2::new(words.next()??, words.next()??);
        let point = G2Affine::new_unchecked(x, y);
        (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()).then_some(point)
    }

    /// Lowercase hex of all 128 bytes, without a `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(bytemuck::bytes_of(self))
    }
}

/// Left-pads a big-endian integer to a single 32-byte word.
///
/// # Panics
///
/// Panics if the integer needs more than 32 bytes. Every field element fits in
/// one word, so a wider value is an invariant violation and is never truncated.
pub fn be_word(bytes: &[u8]) -> [u8; FQ_SIZE] {
    let first_nonzero = bytes
        .iter()
        .position(|byte| *byte != 0)
        .unwrap_or(bytes.len());
    let significant = &bytes[first_nonzero..];
    assert!(
        significant.len() <= FQ_SIZE,
        "integer of {} bytes does not fit in a {FQ_SIZE}-byte word",
        significant.len(),
    );

    let mut word = [0u8; FQ_SIZE];
    word[FQ_SIZE.saturating_sub(significant.len())..].copy_from_slice(significant);
    word
}

/// Serializes a base field element as a 32-byte big-endian word.
pub fn fq_to_be_word(fq: &Fq) -> [u8; FQ_SIZE] {
    be_word(&BigUint::from(fq.into_bigint()).to_bytes_be())
}

fn fq_from_be_word(word: &[u8]) -> Option<Fq> {
    fq_from_canonical(&BigUint::from_bytes_be(word))
}

/// Swaps the real (`c0`) and imaginary (`c1`) components of `Fq2` elements in place.
///
/// `ark_bn254` stores `Fq2` elements as `c0 + c1 * u` in `(c0, c1)` order, while
/// the EVM pairing precompile expects `(c1, c0)`.
///
/// This function expects 64-byte chunks (one `Fq2` element) and swaps the first
/// 32 bytes with the last 32 bytes.
pub(crate) fn swap_fq2_c0_c1(bytes: &mut [u8]) {
    for fq2_chunk in bytes.chunks_exact_mut(FQ2_SIZE) {
        let (c0, c1) = fq2_chunk.split_at_mut(FQ_SIZE);
        c0.swap_with_slice(c1);
    }
}
