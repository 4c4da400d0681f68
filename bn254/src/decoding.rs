use {
    ark_bn254::{Fq, Fr, G1Affine},
    ark_ff::PrimeField,
    num_bigint::{BigInt, BigUint, Sign},
    std::str::FromStr,
    thiserror::Error,
};

/// Errors raised while turning externally supplied values into curve elements.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid decimal literal '{0}'")]
    InvalidDecimal(String),
    #[error("{0} is not less than the BN254 base field modulus")]
    NotInField(String),
    #[error("point is not on the BN254 curve or not in the prime-order subgroup")]
    NotOnCurve,
}

/// Parses a base-10 literal into a base field element.
///
/// The literal must denote a canonical element, i.e. an integer in `[0, p)`.
/// Values that would need a modular reduction are rejected rather than wrapped.
pub fn fq_from_decimal(literal: &str) -> Result<Fq, DecodeError> {
    let value = biguint_from_decimal(literal)?;
    fq_from_canonical(&value).ok_or_else(|| DecodeError::NotInField(literal.to_string()))
}

/// Parses `[+-]?[0-9]+`. Digit separators and whitespace are rejected.
pub fn bigint_from_decimal(literal: &str) -> Result<BigInt, DecodeError> {
    let digits = literal
        .strip_prefix(['+', '-'])
        .unwrap_or(literal);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(DecodeError::InvalidDecimal(literal.to_string()));
    }
    BigInt::from_str(literal).map_err(|_| DecodeError::InvalidDecimal(literal.to_string()))
}

/// Parses a non-negative decimal literal; a negative value is `NotInField`.
pub fn biguint_from_decimal(literal: &str) -> Result<BigUint, DecodeError> {
    let value = bigint_from_decimal(literal)?;
    value
        .to_biguint()
        .ok_or_else(|| DecodeError::NotInField(literal.to_string()))
}

/// Returns `None` unless `value < p`.
pub(crate) fn fq_from_canonical(value: &BigUint) -> Option<Fq> {
    if *value >= BigUint::from(Fq::MODULUS) {
        return None;
    }
    Some(Fq::from_le_bytes_mod_order(&value.to_bytes_le()))
}

/// Converts a big integer into a base field element through its decimal form.
pub fn fq_from_biguint(value: &BigUint) -> Result<Fq, DecodeError> {
    fq_from_decimal(&value.to_str_radix(10))
}

/// Reduces a big integer modulo the scalar field order `r`.
pub fn fr_from_biguint(value: &BigUint) -> Fr {
    Fr::from_le_bytes_mod_order(&value.to_bytes_le())
}

/// Reduces a signed integer modulo `r`; `-v` maps to `r - (v mod r)`.
#[allow(clippy::arithmetic_side_effects)]
pub fn fr_from_bigint(value: &BigInt) -> Fr {
    let magnitude = fr_from_biguint(value.magnitude());
    match value.sign() {
        Sign::Minus => -magnitude,
        Sign::NoSign | Sign::Plus => magnitude,
    }
}

/// Builds an affine G1 point from raw coordinates.
///
/// Checks: Field validity.
/// Skips: Curve equation, Subgroup membership.
pub fn g1_point_from_coordinates(x: &BigUint, y: &BigUint) -> Result<G1Affine, DecodeError> {
    let x = fq_from_biguint(x)?;
    let y = fq_from_biguint(y)?;
    Ok(G1Affine::new_unchecked(x, y))
}

#[cfg(test)]
mod tests {
    use {super::*, ark_ff::One, test_case::test_case};

    // p - 1 and p for the BN254 base field.
    const MODULUS_MINUS_ONE: &str =
        "21888242871839275222246405745257275088696311157297823662689037894645226208582";
    const MODULUS: &str =
        "21888242871839275222246405745257275088696311157297823662689037894645226208583";

    #[test]
    fn test_fq_from_decimal_small_values() {
        assert_eq!(fq_from_decimal("0").unwrap(), Fq::from(0u64));
        assert_eq!(fq_from_decimal("1").unwrap(), Fq::one());
        assert_eq!(fq_from_decimal("3").unwrap(), Fq::from(3u64));
    }

    #[test]
    fn test_fq_from_decimal_largest_element() {
        let fq = fq_from_decimal(MODULUS_MINUS_ONE).unwrap();
        assert_eq!(fq, -Fq::one());
    }

    #[test_case(MODULUS ; "modulus")]
    #[test_case("-1" ; "negative")]
    #[test_case("115792089237316195423570985008687907853269984665640564039457584007913129639935" ; "u256 max")]
    fn test_fq_from_decimal_out_of_field(literal: &str) {
        assert_eq!(
            fq_from_decimal(literal),
            Err(DecodeError::NotInField(literal.to_string()))
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("-" ; "sign only")]
    #[test_case("0x03" ; "hex prefix")]
    #[test_case("12a" ; "trailing garbage")]
    #[test_case("1_0" ; "inner separator")]
    #[test_case("12_" ; "trailing separator")]
    #[test_case(" 1" ; "leading space")]
    #[test_case("--1" ; "double sign")]
    fn test_fq_from_decimal_invalid_literal(literal: &str) {
        assert_eq!(
            fq_from_decimal(literal),
            Err(DecodeError::InvalidDecimal(literal.to_string()))
        );
    }

    #[test]
    fn test_fr_from_biguint_reduces() {
        let order = BigUint::from(Fr::MODULUS);
        assert_eq!(fr_from_biguint(&order), Fr::from(0u64));
        assert_eq!(fr_from_biguint(&(order + 5u8)), Fr::from(5u64));
        assert_eq!(fr_from_biguint(&BigUint::from(7u8)), Fr::from(7u64));
    }

    #[test]
    fn test_bigint_from_decimal_signs() {
        assert_eq!(bigint_from_decimal("-7").unwrap(), BigInt::from(-7));
        assert_eq!(bigint_from_decimal("+7").unwrap(), BigInt::from(7));
        assert_eq!(bigint_from_decimal("007").unwrap(), BigInt::from(7));
        assert_eq!(
            biguint_from_decimal("-7"),
            Err(DecodeError::NotInField("-7".to_string()))
        );
    }

    #[test]
    fn test_fr_from_bigint_wraps_negatives() {
        assert_eq!(fr_from_bigint(&BigInt::from(-1)), -Fr::one());
        assert_eq!(fr_from_bigint(&BigInt::from(0)), Fr::from(0u64));
        let order = BigInt::from(BigUint::from(Fr::MODULUS));
        assert_eq!(fr_from_bigint(&-(order + 2u8)), -Fr::from(2u64));
    }

    #[test]
    fn test_g1_point_from_coordinates_skips_curve_check() {
        let point = g1_point_from_coordinates(&BigUint::from(3u8), &BigUint::from(6u8)).unwrap();
        assert_eq!(point.x, Fq::from(3u64));
        assert_eq!(point.y, Fq::from(6u64));
        assert!(!point.is_on_curve());
    }

    #[test]
    fn test_g1_point_from_coordinates_rejects_out_of_field() {
        let modulus = BigUint::from_str(MODULUS).unwrap();
        assert_eq!(
            g1_point_from_coordinates(&BigUint::from(1u8), &modulus),
            Err(DecodeError::NotInField(MODULUS.to_string()))
        );
    }
}
