use {
    ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective},
    ark_ec::CurveGroup,
};

/// Performs scalar multiplication on G1: `P * s`.
///
/// The point is used as given; callers that received it from outside must
/// check it with [`bn254_g1_point_validation`](crate::bn254_g1_point_validation) first.
pub fn bn254_g1_multiplication(point: &G1Affine, scalar: &Fr) -> G1Affine {
    #[allow(clippy::arithmetic_side_effects)]
    let result_proj = G1Projective::from(*point) * scalar;
    result_proj.into_affine()
}

/// Performs scalar multiplication on G2: `P * s`.
pub fn bn254_g2_multiplication(point: &G2Affine, scalar: &Fr) -> G2Affine {
    #[allow(clippy::arithmetic_side_effects)]
    let result_proj = G2Projective::from(*point) * scalar;
    result_proj.into_affine()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::generators::{G1_GENERATOR, G2_GENERATOR},
        ark_ec::AffineRepr,
        ark_ff::{One, Zero},
        test_case::test_case,
    };

    #[test]
    fn test_g1_multiplication_one() {
        assert_eq!(bn254_g1_multiplication(&G1_GENERATOR, &Fr::one()), G1_GENERATOR);
    }

    #[test]
    fn test_g2_multiplication_one() {
        assert_eq!(bn254_g2_multiplication(&G2_GENERATOR, &Fr::one()), G2_GENERATOR);
    }

    #[test]
    fn test_g1_multiplication_zero() {
        assert!(bn254_g1_multiplication(&G1_GENERATOR, &Fr::zero()).is_zero());
    }

    #[test]
    fn test_g2_multiplication_zero() {
        assert!(bn254_g2_multiplication(&G2_GENERATOR, &Fr::zero()).is_zero());
    }

    #[test]
    fn test_g1_multiplication_minus_one() {
        assert_eq!(bn254_g1_multiplication(&G1_GENERATOR, &-Fr::one()), -G1_GENERATOR);
    }

    #[test]
    fn test_g1_multiplication_two_is_doubling() {
        let doubled = (G1Projective::from(G1_GENERATOR) + G1_GENERATOR).into_affine();
        assert_eq!(bn254_g1_multiplication(&G1_GENERATOR, &Fr::from(2u64)), doubled);
    }

    #[test]
    fn test_g2_multiplication_two_is_doubling() {
        let doubled = (G2Projective::from(G2_GENERATOR) + G2_GENERATOR).into_affine();
        assert_eq!(bn254_g2_multiplication(&G2_GENERATOR, &Fr::from(2u64)), doubled);
    }

    #[test_case(3, 5 ; "small")]
    #[test_case(0xdead_beef, 0x1234_5678_9abc ; "large")]
    fn test_g1_multiplication_composes(a: u64, b: u64) {
        let (a, b) = (Fr::from(a), Fr::from(b));
        let step = bn254_g1_multiplication(&bn254_g1_multiplication(&G1_GENERATOR, &a), &b);
        assert_eq!(step, bn254_g1_multiplication(&G1_GENERATOR, &(a * b)));
    }
}
