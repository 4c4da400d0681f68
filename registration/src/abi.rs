//! The small subset of the Solidity ABI the registration flow needs.

use {
    crate::{address::Address, error::RegistrationError},
    num_bigint::BigUint,
    sha3::{Digest, Keccak256},
};

/// Size of an ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// Registry view function returning the G1 point an operator must sign.
pub const PUBKEY_REGISTRATION_MESSAGE_HASH: &str = "pubkeyRegistrationMessageHash(address)";

/// First four bytes of the Keccak-256 hash of a canonical function signature.
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Call data for a function taking a single `address` argument.
pub fn encode_address_call(signature: &str, address: &Address) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + WORD_SIZE);
    data.extend_from_slice(&function_selector(signature));
    data.extend_from_slice(&address.to_word());
    data
}

/// Decodes the return data of a function returning `(uint256, uint256)`.
pub fn decode_uint256_pair(data: &[u8]) -> Result<(BigUint, BigUint), RegistrationError> {
    if data.len() != 2 * WORD_SIZE {
        return Err(RegistrationError::AbiDecode(format!(
            "expected 2 values ({} bytes), got {} bytes",
            2 * WORD_SIZE,
            data.len()
        )));
    }
    let (x, y) = data.split_at(WORD_SIZE);
    Ok((BigUint::from_bytes_be(x), BigUint::from_bytes_be(y)))
}

/// A length as a 64-hex-character (32-byte) big-endian word.
pub fn length_word(len: usize) -> String {
    format!("{len:064x}")
}

/// Hex-encodes `s` as a byte-count word followed by its raw UTF-8 bytes.
///
/// No tail padding is applied; callers concatenate the result as is.
pub fn encode_dynamic_string(s: &str) -> String {
    format!("{}{}", length_word(s.len()), hex::encode(s.as_bytes()))
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    #[test]
    fn test_function_selector_known_values() {
        assert_eq!(
            function_selector("transfer(address,uint256)"),
            [0xa9, 0x05, 0x9c, 0xbb]
        );
        assert_eq!(function_selector("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_encode_address_call_layout() {
        let operator: Address = "0x90F79bf6EB2c4f870365E785982E1f101E93b906".parse().unwrap();
        let data = encode_address_call(PUBKEY_REGISTRATION_MESSAGE_HASH, &operator);
        assert_eq!(data.len(), 36);
        assert_eq!(data[..4], function_selector(PUBKEY_REGISTRATION_MESSAGE_HASH));
        assert_eq!(data[4..16], [0u8; 12]);
        assert_eq!(data[16..], operator.0);
    }

    #[test]
    fn test_decode_uint256_pair() {
        let mut data = vec![0u8; 64];
        data[31] = 3;
        data[63] = 6;
        let (x, y) = decode_uint256_pair(&data).unwrap();
        assert_eq!(x, BigUint::from(3u8));
        assert_eq!(y, BigUint::from(6u8));
    }

    #[test]
    fn test_decode_uint256_pair_wrong_shape() {
        assert_matches!(decode_uint256_pair(&[]), Err(RegistrationError::AbiDecode(_)));
        assert_matches!(
            decode_uint256_pair(&[0u8; 32]),
            Err(RegistrationError::AbiDecode(_))
        );
        assert_matches!(
            decode_uint256_pair(&[0u8; 96]),
            Err(RegistrationError::AbiDecode(_))
        );
    }

    #[test]
    fn test_encode_dynamic_string() {
        assert_eq!(
            encode_dynamic_string("127.0.0.1:9000"),
            format!("{:0>64}{}", "e", "3132372e302e302e313a39303030")
        );
        assert_eq!(encode_dynamic_string(""), "0".repeat(64));
    }

    #[test]
    fn test_encode_dynamic_string_counts_bytes_not_chars() {
        // "é" is two bytes in UTF-8
        assert_eq!(encode_dynamic_string("é"), format!("{:0>64}c3a9", "2"));
    }
}
