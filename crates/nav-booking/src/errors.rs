use nav_core::CoreEngineError;
use thiserror::Error;

/// Errores del asistente de reserva.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Paso desconocido: {0}")]
    UnknownStep(String),

    /// `start` después de algún tap; lleva el step en el cursor.
    #[error("La sesión ya empezó en: {0}")]
    AlreadyStarted(String),

    #[error(transparent)]
    Flow(#[from] CoreEngineError),

    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_errors_are_transparent() {
        let err: BookingError = CoreEngineError::UnknownStep("refund".into()).into();
        assert_eq!(err.to_string(), "unknown step: refund");
    }

    #[test]
    fn unknown_step_format() {
        assert_eq!(BookingError::UnknownStep("upgrade".into()).to_string(), "Paso desconocido: upgrade");
    }

    #[test]
    fn already_started_names_the_current_step() {
        assert_eq!(BookingError::AlreadyStarted("payment".into()).to_string(),
                   "La sesión ya empezó en: payment");
    }
}
