use {
    crate::{
        address::Address,
        composer::{BlsRegistration, HashPointCheck},
        error::RegistrationError,
        hash_point::{HashPoint, HashPointSource},
        key_material::KeyMaterial,
        params::{build_registration_params, RegistrationParams},
    },
    log::*,
};

/// Everything produced for one operator in a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationArtifacts {
    pub hash_point: HashPoint,
    pub registration: BlsRegistration,
    pub params: RegistrationParams,
}

/// Runs the whole pipeline for one operator.
///
/// The hash point is fetched once; any error from the source or from decoding
/// aborts the run without producing output.
pub fn generate_registration<S: HashPointSource + ?Sized>(
    source: &S,
    registry: &Address,
    operator: &Address,
    key: &KeyMaterial,
    socket: &str,
    check: HashPointCheck,
) -> Result<RegistrationArtifacts, RegistrationError> {
    let hash_point = source.pubkey_registration_message_hash(registry, operator)?;
    debug!(
        "hash point for operator {operator}: X=[{}], Y=[{}]",
        hash_point.x, hash_point.y
    );

    let registration = check.compose(key, &hash_point)?;
    let params = build_registration_params(socket, &registration.to_solidity_hex());
    debug!(
        "register params data for operator {operator} is {} bytes",
        params.register_params_data.len().saturating_sub(2) / 2
    );

    Ok(RegistrationArtifacts {
        hash_point,
        registration,
        params,
    })
}
