use {
    crate::error::RegistrationError,
    avs_bn254::{
        bigint_from_decimal, bn254_g1_multiplication, bn254_g2_multiplication, fr_from_bigint,
        fr_from_biguint, Fr, G1Affine, G2Affine, G1_GENERATOR, G2_GENERATOR,
    },
    num_bigint::BigUint,
    std::{fmt, str::FromStr},
};

/// A BLS private key, always reduced modulo the scalar field order.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    scalar: Fr,
}

impl KeyMaterial {
    pub fn from_scalar(scalar: Fr) -> Self {
        Self { scalar }
    }

    pub fn from_biguint(value: &BigUint) -> Self {
        Self::from_scalar(fr_from_biguint(value))
    }

    /// `G1 * sk`
    pub fn derive_g1_public_key(&self) -> G1Affine {
        bn254_g1_multiplication(&G1_GENERATOR, &self.scalar)
    }

    /// `G2 * sk`
    pub fn derive_g2_public_key(&self) -> G2Affine {
        bn254_g2_multiplication(&G2_GENERATOR, &self.scalar)
    }

    /// Signs a point that is already on the curve: `point * sk`.
    pub fn sign(&self, point: &G1Affine) -> G1Affine {
        bn254_g1_multiplication(point, &self.scalar)
    }
}

impl FromStr for KeyMaterial {
    type Err = RegistrationError;

    /// Parses a signed base-10 private key; negative keys wrap around `r`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = bigint_from_decimal(s).map_err(|_| RegistrationError::InvalidKey)?;
        Ok(Self::from_scalar(fr_from_bigint(&value)))
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial").finish_non_exhaustive()
    }
}
