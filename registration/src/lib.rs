//! Proof-of-possession artifacts for registering a BN254 BLS key with an
//! on-chain operator registry.
//!
//! The pipeline runs strictly forward:
//!
//! 1. A [`HashPointSource`] returns the G1 "hash point" the registry derives
//!    from the operator address.
//! 2. [`KeyMaterial`] signs it and derives the G1 and G2 public keys
//!    ([`compose`]).
//! 3. The results are encoded as EVM words
//!    ([`encode_pubkey_registration_params`]).
//! 4. The operator socket and the encoded keys are wrapped into the
//!    length-prefixed blob the registry accepts ([`build_registration_params`]).
//!
//! Only the hash point source performs I/O; everything else is a pure function
//! of its inputs.

pub use crate::{
    abi::{encode_dynamic_string, length_word, WORD_SIZE},
    address::Address,
    composer::{compose, compose_unchecked, BlsRegistration, HashPointCheck},
    error::RegistrationError,
    generate::{generate_registration, RegistrationArtifacts},
    hash_point::{HashPoint, HashPointSource, StaticHashPointSource},
    key_material::KeyMaterial,
    params::{
        build_registration_params, decode_operator_registration, decode_register_params_data,
        OperatorRegistration, RegistrationParams,
    },
    solidity::{encode_pubkey_registration_params, PUBKEY_REGISTRATION_PARAMS_HEX_LEN},
};

pub mod abi;
mod address;
mod composer;
mod error;
mod generate;
mod hash_point;
mod key_material;
mod params;
mod solidity;
