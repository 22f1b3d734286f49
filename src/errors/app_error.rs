use nav_booking::BookingError;
use nav_core::CoreEngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Argumento inválido: {0}")]
    InvalidTap(String),
    #[error("Error de flujo: {0}")]
    Flow(#[from] CoreEngineError),
    #[error("Error de reserva: {0}")]
    Booking(#[from] BookingError),
}
