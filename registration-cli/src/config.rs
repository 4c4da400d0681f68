//! Readers for the devnet files the generator takes its inputs from.

use {
    avs_operator_registration::{Address, RegistrationError},
    log::*,
    serde::Deserialize,
    std::{
        fs,
        path::{Path, PathBuf},
    },
    url::Url,
};

pub const DEFAULT_CHAIN_ID: u64 = 31337;
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Chain settings from `<contexts-dir>/<context>.yaml`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextConfig {
    pub chain_id: u64,
    pub rpc_url: Url,
}

#[derive(Deserialize)]
struct ContextFile {
    #[serde(default)]
    context: ContextSection,
}

#[derive(Default, Deserialize)]
struct ContextSection {
    #[serde(default)]
    chain_id: u64,
    #[serde(default)]
    rpc_url: String,
}

impl ContextConfig {
    pub fn load(contexts_dir: &Path, context: &str) -> Result<Self, RegistrationError> {
        let path = contexts_dir.join(format!("{context}.yaml"));
        let contents = read_file(&path)?;
        Self::from_yaml(&path, &contents)
    }

    /// A missing or zero `chain_id` and a missing or empty `rpc_url` fall back
    /// to the local devnet defaults.
    pub fn from_yaml(path: &Path, contents: &str) -> Result<Self, RegistrationError> {
        let file: ContextFile =
            serde_yaml::from_str(contents).map_err(|err| config_error(path, err))?;
        let section = file.context;

        let chain_id = match section.chain_id {
            0 => DEFAULT_CHAIN_ID,
            chain_id => chain_id,
        };
        let rpc_url = if section.rpc_url.is_empty() {
            DEFAULT_RPC_URL
        } else {
            section.rpc_url.as_str()
        };
        let rpc_url = Url::parse(rpc_url)
            .map_err(|err| config_error(path, format!("invalid rpc_url '{rpc_url}': {err}")))?;

        Ok(Self { chain_id, rpc_url })
    }
}

/// Operator list from `framework.yaml`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FrameworkConfig {
    #[serde(default)]
    pub operators: Vec<OperatorEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OperatorEntry {
    pub address: String,
    pub socket: String,
}

impl FrameworkConfig {
    pub fn load(path: &Path) -> Result<Self, RegistrationError> {
        let contents = read_file(path)?;
        serde_yaml::from_str(&contents).map_err(|err| config_error(path, err))
    }

    /// Finds the socket of `operator`; addresses are compared as bytes, so case
    /// and the `0x` prefix do not matter.
    pub fn socket_for(&self, operator: &Address) -> Result<&str, RegistrationError> {
        self.operators
            .iter()
            .find(|entry| match entry.address.parse::<Address>() {
                Ok(address) => address == *operator,
                Err(err) => {
                    debug!("skipping operator entry: {err}");
                    false
                }
            })
            .map(|entry| entry.socket.as_str())
            .ok_or(RegistrationError::SocketNotFound(*operator))
    }
}

/// Contract addresses from the AVS deployment output JSON.
#[derive(Clone, Debug, Deserialize)]
pub struct DeployOutput {
    pub addresses: DeployedAddresses,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DeployedAddresses {
    #[serde(rename = "taskAVSRegistrar")]
    pub task_avs_registrar: String,
}

impl DeployOutput {
    pub fn load(path: &Path) -> Result<Self, RegistrationError> {
        let contents = read_file(path)?;
        Self::from_json(path, &contents)
    }

    pub fn from_json(path: &Path, contents: &str) -> Result<Self, RegistrationError> {
        serde_json::from_str(contents).map_err(|err| config_error(path, err))
    }

    /// The registry the hash point is read from.
    pub fn task_avs_registrar(&self, path: &Path) -> Result<Address, RegistrationError> {
        self.addresses
            .task_avs_registrar
            .parse()
            .map_err(|err| config_error(path, err))
    }
}

fn read_file(path: &Path) -> Result<String, RegistrationError> {
    fs::read_to_string(path).map_err(|err| config_error(path, err))
}

fn config_error(path: &Path, reason: impl ToString) -> RegistrationError {
    RegistrationError::ConfigRead {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}
