//! # VIOLATION KINDS
//!
//! **CRITICAL**: Closed classification of why a field failed validation.
//! **MANDATE**: Resolution from a validator rule id is EXACT match; a miss is a typed error.

use crate::errors::EnvelopeError;
use serde::{Deserialize, Serialize};

/// **VIOLATION KIND**
///
/// **WIRE FORMAT**: Serialized with the historical names API consumers already match on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Required request parameter absent. Never produced from a rule id.
    #[serde(rename = "Missing_Key")]
    MissingKey,

    #[serde(rename = "Key_Value_Is_Null")]
    NullValue,

    #[serde(rename = "Invalid_Pattern")]
    PatternMismatch,

    #[serde(rename = "Invalid_Value_Length")]
    LengthOutOfRange,

    #[serde(rename = "Email_Not_Formatted")]
    EmailFormatInvalid,
}

impl ViolationKind {
    /// **ALL KINDS**
    pub const ALL: [ViolationKind; 5] = [
        ViolationKind::MissingKey,
        ViolationKind::NullValue,
        ViolationKind::PatternMismatch,
        ViolationKind::LengthOutOfRange,
        ViolationKind::EmailFormatInvalid,
    ];

    /// **VALIDATOR RULE ID** - `None` for kinds no field validator reports
    pub const fn rule_id(self) -> Option<&'static str> {
        match self {
            ViolationKind::MissingKey => None,
            ViolationKind::NullValue => Some("NotNull"),
            ViolationKind::PatternMismatch => Some("Pattern"),
            ViolationKind::LengthOutOfRange => Some("Size"),
            ViolationKind::EmailFormatInvalid => Some("Email"),
        }
    }

    /// **RESOLVE RULE ID**
    ///
    /// **ERRORS**: `EnvelopeError::UnknownViolationKind` - validator reported a rule this table does not know
    pub fn from_rule_id(rule_id: &str) -> Result<ViolationKind, EnvelopeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.rule_id() == Some(rule_id))
            .ok_or_else(|| EnvelopeError::UnknownViolationKind {
                rule_id: rule_id.to_string(),
            })
    }
}
