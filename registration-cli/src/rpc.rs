//! Hash point lookup over Ethereum JSON-RPC.

use {
    avs_operator_registration::{
        abi::{decode_uint256_pair, encode_address_call, PUBKEY_REGISTRATION_MESSAGE_HASH},
        Address, HashPoint, HashPointSource, RegistrationError,
    },
    log::*,
    serde::{Deserialize, Serialize},
    serde_json::{json, Value},
    std::time::Duration,
    url::Url,
};

const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Serialize)]
struct JsonRpcRequest {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

/// Reads `pubkeyRegistrationMessageHash(operator)` from the registry with a
/// read-only `eth_call` against the latest block.
pub struct JsonRpcHashPointSource {
    client: reqwest::blocking::Client,
    url: Url,
}

impl JsonRpcHashPointSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, RegistrationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RegistrationError::Rpc(format!("client instantiation failed: {err}")))?;
        Ok(Self { client, url })
    }

    fn eth_call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, RegistrationError> {
        let request = eth_call_request(to, data);
        debug!("eth_call to {to} via {}", self.url);

        let response = self
            .client
            .post(self.url.as_str())
            .json(&request)
            .send()
            .map_err(|err| RegistrationError::Rpc(format!("request failed: {err}")))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|err| RegistrationError::Rpc(format!("failed to read response: {err}")))?;
        if !status.is_success() {
            return Err(RegistrationError::Rpc(format!(
                "response unsuccessful: {status} {text}"
            )));
        }

        parse_eth_call_response(&text)
    }
}

impl HashPointSource for JsonRpcHashPointSource {
    fn pubkey_registration_message_hash(
        &self,
        registry: &Address,
        operator: &Address,
    ) -> Result<HashPoint, RegistrationError> {
        let call = encode_address_call(PUBKEY_REGISTRATION_MESSAGE_HASH, operator);
        let output = self.eth_call(registry, &call)?;
        let (x, y) = decode_uint256_pair(&output)?;
        Ok(HashPoint::new(x, y))
    }
}

fn eth_call_request(to: &Address, data: &[u8]) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: JSONRPC_VERSION,
        id: 1,
        method: "eth_call",
        params: json!([
            {
                "to": to.to_checksum_string(),
                "data": format!("0x{}", hex::encode(data)),
            },
            "latest",
        ]),
    }
}

fn parse_eth_call_response(body: &str) -> Result<Vec<u8>, RegistrationError> {
    let response: JsonRpcResponse = serde_json::from_str(body)
        .map_err(|err| RegistrationError::Rpc(format!("malformed response: {err}")))?;

    if let Some(error) = response.error {
        return Err(RegistrationError::Rpc(format!(
            "{} (code {})",
            error.message, error.code
        )));
    }
    let result = response
        .result
        .ok_or_else(|| RegistrationError::Rpc("response carries no result".to_string()))?;

    let hex_result = result.strip_prefix("0x").unwrap_or(&result);
    hex::decode(hex_result)
        .map_err(|err| RegistrationError::AbiDecode(format!("result is not hex: {err}")))
}
