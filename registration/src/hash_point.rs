use {
    crate::{address::Address, error::RegistrationError},
    avs_bn254::{
        biguint_from_decimal, bn254_g1_point_validation, g1_point_from_coordinates, DecodeError,
        G1Affine,
    },
    num_bigint::BigUint,
};

/// The G1 point a registry derives from an operator address, as returned by
/// `pubkeyRegistrationMessageHash(address)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashPoint {
    pub x: BigUint,
    pub y: BigUint,
}

impl HashPoint {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Parses both coordinates from base-10 literals. Negative coordinates are
    /// rejected.
    pub fn from_decimal(x: &str, y: &str) -> Result<Self, RegistrationError> {
        Ok(Self::new(biguint_from_decimal(x)?, biguint_from_decimal(y)?))
    }

    /// Converts to an affine point without checking curve membership.
    pub fn to_affine_unchecked(&self) -> Result<G1Affine, RegistrationError> {
        Ok(g1_point_from_coordinates(&self.x, &self.y)?)
    }

    /// Converts to an affine point, rejecting anything that is not a member of G1.
    pub fn to_affine(&self) -> Result<G1Affine, RegistrationError> {
        let point = self.to_affine_unchecked()?;
        if !bn254_g1_point_validation(&point) {
            return Err(DecodeError::NotOnCurve.into());
        }
        Ok(point)
    }
}

/// Source of the hash point for an operator.
///
/// Implementations may block on I/O. A failure aborts the registration run;
/// implementations must not retry on their own.
pub trait HashPointSource {
    fn pubkey_registration_message_hash(
        &self,
        registry: &Address,
        operator: &Address,
    ) -> Result<HashPoint, RegistrationError>;
}

/// Returns the same hash point for every query.
#[derive(Clone, Debug)]
pub struct StaticHashPointSource(pub HashPoint);

impl HashPointSource for StaticHashPointSource {
    fn pubkey_registration_message_hash(
        &self,
        _registry: &Address,
        _operator: &Address,
    ) -> Result<HashPoint, RegistrationError> {
        Ok(self.0.clone())
    }
}
