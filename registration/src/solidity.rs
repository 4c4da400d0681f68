use avs_bn254::{G1Affine, G2Affine, PodG1Point, PodG2Point, FQ_SIZE};

/// Length of the encoded parameters: `0x` plus eight 64-character words.
pub const PUBKEY_REGISTRATION_PARAMS_HEX_LEN: usize = 2 + 8 * 2 * FQ_SIZE;

/// Encodes the signature and public keys as the registry's
/// `PubkeyRegistrationParams` words.
///
/// Word order:
/// `sig.X, sig.Y, pk_g1.X, pk_g1.Y, pk_g2.X.a1, pk_g2.X.a0, pk_g2.Y.a1, pk_g2.Y.a0`.
/// The G2 coefficients are written imaginary part first, which is how the EVM
/// pairing precompile reads them.
pub fn encode_pubkey_registration_params(
    signature: &G1Affine,
    pubkey_g1: &G1Affine,
    pubkey_g2: &G2Affine,
) -> String {
    let mut out = String::with_capacity(PUBKEY_REGISTRATION_PARAMS_HEX_LEN);
    out.push_str("0x");
    out.push_str(&PodG1Point::from_affine(signature).to_hex());
    out.push_str(&PodG1Point::from_affine(pubkey_g1).to_hex());
    out.push_str(&PodG2Point::from_affine(pubkey_g2).to_hex());
    out
}
