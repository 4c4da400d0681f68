use {
    crate::{
        error::RegistrationError, hash_point::HashPoint, key_material::KeyMaterial,
        solidity::encode_pubkey_registration_params,
    },
    avs_bn254::{bn254_pairing_check, G1Affine, G2Affine, G1_GENERATOR, G2_GENERATOR},
    log::*,
};

/// How much of the hash point returned by the registry is trusted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashPointCheck {
    /// Reject points that are not members of G1.
    #[default]
    OnCurve,
    /// Use the coordinates as returned; only field validity is checked.
    Skip,
}

/// The proof of possession and both public keys for one operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlsRegistration {
    pub signature: G1Affine,
    pub pubkey_g1: G1Affine,
    pub pubkey_g2: G2Affine,
}

impl BlsRegistration {
    /// The `0x`-prefixed 514-character encoding the registry expects.
    pub fn to_solidity_hex(&self) -> String {
        encode_pubkey_registration_params(&self.signature, &self.pubkey_g1, &self.pubkey_g2)
    }

    /// Checks the pairing equations the registry evaluates on-chain:
    ///
    /// - `e(sig, -G2) * e(H, pk_g2) == 1`, the signature over the hash point;
    /// - `e(pk_g1, -G2) * e(G1, pk_g2) == 1`, both keys share one secret.
    pub fn verify(&self, hash_point: &G1Affine) -> bool {
        let neg_g2 = -G2_GENERATOR;
        bn254_pairing_check(&[(self.signature, neg_g2), (*hash_point, self.pubkey_g2)])
            && bn254_pairing_check(&[(self.pubkey_g1, neg_g2), (G1_GENERATOR, self.pubkey_g2)])
    }
}

/// Signs a hash point after checking that it is a member of G1.
pub fn compose(
    key: &KeyMaterial,
    hash_point: &HashPoint,
) -> Result<BlsRegistration, RegistrationError> {
    let point = hash_point.to_affine()?;
    Ok(compose_point(key, &point))
}

/// Signs a hash point exactly as the registry returned it.
pub fn compose_unchecked(
    key: &KeyMaterial,
    hash_point: &HashPoint,
) -> Result<BlsRegistration, RegistrationError> {
    let point = hash_point.to_affine_unchecked()?;
    Ok(compose_point(key, &point))
}

impl HashPointCheck {
    pub fn compose(
        self,
        key: &KeyMaterial,
        hash_point: &HashPoint,
    ) -> Result<BlsRegistration, RegistrationError> {
        match self {
            Self::OnCurve => compose(key, hash_point),
            Self::Skip => {
                warn!("using hash point without checking curve membership");
                compose_unchecked(key, hash_point)
            }
        }
    }
}

fn compose_point(key: &KeyMaterial, point: &G1Affine) -> BlsRegistration {
    BlsRegistration {
        signature: key.sign(point),
        pubkey_g1: key.derive_g1_public_key(),
        pubkey_g2: key.derive_g2_public_key(),
    }
}
