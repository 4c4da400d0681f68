use {crate::address::Address, avs_bn254::DecodeError, std::path::PathBuf, thiserror::Error};

/// Every failure is fatal to a registration run; there is no partial output.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("error reading {}: {reason}", .path.display())]
    ConfigRead { path: PathBuf, reason: String },
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("ABI decode error: {0}")]
    AbiDecode(String),
    #[error("invalid hash point: {0}")]
    PointDecode(#[from] DecodeError),
    #[error("invalid BLS private key, expected a base-10 integer")]
    InvalidKey,
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
    #[error("socket not found for operator {0}")]
    SocketNotFound(Address),
}
