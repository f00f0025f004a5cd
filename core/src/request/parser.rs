use crate::fault::Fault;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::str::FromStr;

pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.split('=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) => Some((
                    urlencoding::decode(key).ok()?.into_owned(),
                    urlencoding::decode(value).ok()?.into_owned(),
                )),
                _ => None,
            }
        })
        .collect()
}

pub fn parse_json_body(data: &[u8]) -> Result<serde_json::Value, Fault> {
    parse_json_payload(data)
}

/// **TYPED BODY** - Unreadable or mistyped bodies become `Fault::MalformedBody`
pub fn parse_json_payload<T: DeserializeOwned>(data: &[u8]) -> Result<T, Fault> {
    serde_json::from_slice(data).map_err(|e| Fault::malformed_body(e.to_string()))
}

/// **REQUIRED PARAMETER**
///
/// **ERRORS**:
/// - `Fault::MissingParameter` when `name` is absent
/// - `Fault::TypeMismatch` when the value does not parse as `T`
pub fn required_param<T: FromStr>(
    params: &HashMap<String, String>,
    name: &str,
    type_name: &str,
) -> Result<T, Fault> {
    let raw = params
        .get(name)
        .ok_or_else(|| Fault::missing_parameter(name, type_name))?;

    raw.parse::<T>()
        .map_err(|_| Fault::type_mismatch(name, raw.as_str(), type_name))
}
