use ark_bn254::{G1Affine, G2Affine};

/// Validates that a G1 point is on the curve and in the correct subgroup.
///
/// G1 has cofactor 1, so for BN254 this is the curve equation `y^2 = x^3 + 3`.
/// The point at infinity is valid.
pub fn bn254_g1_point_validation(point: &G1Affine) -> bool {
    point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()
}

/// Validates that a G2 point is on the twist and in the prime-order subgroup.
pub fn bn254_g2_point_validation(point: &G2Affine) -> bool {
    point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()
}
