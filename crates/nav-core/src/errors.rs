//! Errores del núcleo de navegación.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreEngineError {
    /// Un flujo sin pasos no es construible.
    #[error("flow must declare at least one step")] EmptyFlow,
    /// `skip_to` pidió un id que el flujo no declara (política `Reject`).
    #[error("unknown step: {0}")] UnknownStep(String),
    #[error("invalid unknown-skip policy: {0}")] InvalidPolicy(String),
    /// El log se abrió con otra definición (hash o número de steps distintos).
    #[error("definition mismatch: log has {found}, definition has {expected}")]
    DefinitionMismatch { expected: String, found: String },
}
