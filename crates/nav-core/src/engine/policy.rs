use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreEngineError;

/// Qué hace `advance` cuando `skip_to` nombra un step que el flujo no declara.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSkipPolicy {
    /// Devuelve `CoreEngineError::UnknownStep` y deja el cursor donde está.
    #[default]
    Reject,
    /// Ignora el salto y avanza uno (con tope en el último step).
    AdvanceByOne,
}

impl FromStr for UnknownSkipPolicy {
    type Err = CoreEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "advance" | "advance_by_one" => Ok(Self::AdvanceByOne),
            other => Err(CoreEngineError::InvalidPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for UnknownSkipPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::AdvanceByOne => f.write_str("advance"),
        }
    }
}
