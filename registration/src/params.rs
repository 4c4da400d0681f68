use {
    crate::{
        abi::{encode_dynamic_string, length_word, WORD_SIZE},
        error::RegistrationError,
    },
    num_bigint::BigUint,
};

/// The two values printed for an operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationParams {
    /// `0x` + the eight key words.
    pub pubkey_registration_params: String,
    /// `0x` + byte-length word + socket string + key words.
    pub register_params_data: String,
}

/// Wraps the socket and the encoded keys into the registry's `data` blob.
///
/// `encoded_pubkey_params` is the output of
/// [`encode_pubkey_registration_params`](crate::encode_pubkey_registration_params).
pub fn build_registration_params(socket: &str, encoded_pubkey_params: &str) -> RegistrationParams {
    let pubkey_words = strip_hex_prefix(encoded_pubkey_params);
    let operator_registration_params =
        format!("0x{}{}", encode_dynamic_string(socket), pubkey_words);

    // one byte per two hex characters, excluding the leading `0x`
    let byte_len = (operator_registration_params.len() / 2).saturating_sub(1);
    let register_params_data = format!(
        "0x{}{}",
        length_word(byte_len),
        strip_hex_prefix(&operator_registration_params)
    );

    RegistrationParams {
        pubkey_registration_params: format!("0x{pubkey_words}"),
        register_params_data,
    }
}

/// Reads the leading length word of `register_params_data` and returns exactly
/// that many payload bytes.
pub fn decode_register_params_data(data: &str) -> Result<Vec<u8>, RegistrationError> {
    let bytes = hex::decode(strip_hex_prefix(data))
        .map_err(|err| RegistrationError::AbiDecode(format!("invalid hex: {err}")))?;
    let (len, payload) = read_length_prefixed(&bytes)?;
    if payload.len() != len {
        return Err(RegistrationError::AbiDecode(format!(
            "length word says {len} bytes, found {}",
            payload.len()
        )));
    }
    Ok(payload.to_vec())
}

/// The decoded contents of an operator registration payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorRegistration {
    pub socket: String,
    /// The raw key words, without hex encoding.
    pub pubkey_registration_params: Vec<u8>,
}

/// Splits a payload returned by [`decode_register_params_data`] into the
/// socket string and the key words that follow it.
pub fn decode_operator_registration(
    payload: &[u8],
) -> Result<OperatorRegistration, RegistrationError> {
    let (len, rest) = read_length_prefixed(payload)?;
    if rest.len() < len {
        return Err(RegistrationError::AbiDecode(format!(
            "socket length {len} exceeds remaining {} bytes",
            rest.len()
        )));
    }
    let (socket, pubkey_registration_params) = rest.split_at(len);
    let socket = String::from_utf8(socket.to_vec())
        .map_err(|err| RegistrationError::AbiDecode(format!("socket is not UTF-8: {err}")))?;
    Ok(OperatorRegistration {
        socket,
        pubkey_registration_params: pubkey_registration_params.to_vec(),
    })
}

fn read_length_prefixed(bytes: &[u8]) -> Result<(usize, &[u8]), RegistrationError> {
    if bytes.len() < WORD_SIZE {
        return Err(RegistrationError::AbiDecode(format!(
            "expected a {WORD_SIZE}-byte length word, got {} bytes",
            bytes.len()
        )));
    }
    let (word, rest) = bytes.split_at(WORD_SIZE);
    let len = usize::try_from(&BigUint::from_bytes_be(word))
        .map_err(|_| RegistrationError::AbiDecode("length word overflows usize".to_string()))?;
    Ok((len, rest))
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}
