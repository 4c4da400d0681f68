use {
    ark_bn254::{Bn254, G1Affine, G2Affine},
    ark_ec::pairing::Pairing,
    ark_ff::One,
};

/// Checks whether the product of pairings over a batch of G1 and G2 points is
/// the identity of the target group.
///
/// Mathematically, this computes:
/// `e(P_1, Q_1) * e(P_2, Q_2) * ... * e(P_n, Q_n) == 1`
///
/// This is the same predicate the EVM `ecPairing` precompile evaluates. An
/// empty batch is trivially the identity.
pub fn bn254_pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
    if pairs.is_empty() {
        return true;
    }

    let g1_points = pairs.iter().map(|(p, _)| *p);
    let g2_points = pairs.iter().map(|(_, q)| *q);
    Bn254::multi_pairing(g1_points, g2_points).0.is_one()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            generators::{G1_GENERATOR, G2_GENERATOR},
            multiplication::{bn254_g1_multiplication, bn254_g2_multiplication},
        },
        ark_bn254::Fr,
    };

    #[test]
    fn test_pairing_identity() {
        assert!(bn254_pairing_check(&[]));
    }

    #[test]
    fn test_pairing_one_pair_is_not_identity() {
        assert!(!bn254_pairing_check(&[(G1_GENERATOR, G2_GENERATOR)]));
    }

    #[test]
    fn test_pairing_bilinearity() {
        // e(aP, Q) * e(P, -aQ) == 1
        let a = Fr::from(0xabcdef_u64);
        let a_p = bn254_g1_multiplication(&G1_GENERATOR, &a);
        let a_q = bn254_g2_multiplication(&G2_GENERATOR, &a);
        assert!(bn254_pairing_check(&[(a_p, G2_GENERATOR), (G1_GENERATOR, -a_q)]));
        assert!(!bn254_pairing_check(&[(a_p, G2_GENERATOR), (G1_GENERATOR, a_q)]));
    }

    #[test]
    fn test_pairing_three_pairs() {
        // e(2P, Q) * e(3P, Q) * e(P, -5Q) == 1
        let two_p = bn254_g1_multiplication(&G1_GENERATOR, &Fr::from(2u64));
        let three_p = bn254_g1_multiplication(&G1_GENERATOR, &Fr::from(3u64));
        let five_q = bn254_g2_multiplication(&G2_GENERATOR, &Fr::from(5u64));
        assert!(bn254_pairing_check(&[
            (two_p, G2_GENERATOR),
            (three_p, G2_GENERATOR),
            (G1_GENERATOR, -five_q),
        ]));
    }
}
