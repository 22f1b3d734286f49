//! nav-booking: asistente de reserva sobre `nav-core`.
//!
//! Declara los cuatro steps (búsqueda → asientos → pago → confirmación), las
//! páginas que producen sus fábricas y el `Navigator`, que es quien aporta el
//! input de cada step y presenta la página resultante.

pub mod errors;
pub mod inputs;
pub mod navigator;
pub mod pages;
pub mod presenter;
pub mod steps;

pub use errors::BookingError;
pub use inputs::BookingInputs;
pub use navigator::Navigator;
pub use pages::{ConfirmationPage, Page, PaymentPage, SearchPage, SeatSelectionPage};
pub use presenter::{Presenter, RecordingPresenter, StdoutPresenter};
pub use steps::BookingStep;
