//! # SERVICE CODE REGISTRY
//!
//! **STATIC LOOKUP TABLE FOR APPLICATION RESPONSE CODES**
//!
//! Every envelope references exactly one `ServiceCode`. The registry answers two
//! questions: which code has this number, and which code has this name.
//!
//! ## LOOKUP COST
//!
//! 1. **BY CODE** - Binary search over `ServiceCode::ALL` (ascending order)
//! 2. **BY NAME** - Exact match through an immutable index built on first use
//!
//! ## USAGE
//!
//! ```rust
//! use service_response::registry::ServiceCode;
//!
//! let code = ServiceCode::from_code(3430)?;
//! assert_eq!(code, ServiceCode::EntityNotFound);
//! # Ok::<(), service_response::errors::EnvelopeError>(())
//! ```

use crate::errors::EnvelopeError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub mod codes;

pub use codes::ServiceCode;

static NAME_INDEX: Lazy<HashMap<&'static str, ServiceCode>> = Lazy::new(|| {
    ServiceCode::ALL
        .iter()
        .map(|code| (code.name(), *code))
        .collect()
});

impl ServiceCode {
    /// **RESOLVE BY CODE**
    ///
    /// **RETURNS**: `None` when no row carries `code`
    pub fn resolve(code: u32) -> Option<ServiceCode> {
        Self::ALL
            .binary_search_by_key(&code, |entry| entry.code())
            .ok()
            .map(|index| Self::ALL[index])
    }

    /// **LOOKUP BY CODE**
    ///
    /// **ERRORS**: `EnvelopeError::UnknownServiceCode` - the caller passed an unregistered code
    pub fn from_code(code: u32) -> Result<ServiceCode, EnvelopeError> {
        Self::resolve(code).ok_or(EnvelopeError::UnknownServiceCode { code })
    }

    /// **LOOKUP BY NAME**
    ///
    /// **ERRORS**: `EnvelopeError::UnknownServiceName` - no exact name match
    pub fn from_name(name: &str) -> Result<ServiceCode, EnvelopeError> {
        NAME_INDEX
            .get(name)
            .copied()
            .ok_or_else(|| EnvelopeError::UnknownServiceName {
                name: name.to_string(),
            })
    }
}

impl FromStr for ServiceCode {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceCode::from_name(s)
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.name())
    }
}

impl Serialize for ServiceCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ServiceCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ServiceCode::from_name(&name).map_err(serde::de::Error::custom)
    }
}
