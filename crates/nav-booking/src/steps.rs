//! Steps del asistente de reserva.
use nav_core::{flow_steps, Initializer};

use crate::errors::BookingError;
use crate::inputs::BookingInputs;
use crate::pages::{ConfirmationPage, Page, PaymentPage, SearchPage, SeatSelectionPage};

flow_steps! {
    /// Un step por pantalla. El tipo de input de cada variante está fijado
    /// aquí; pasarle otro a su fábrica no compila.
    pub enum BookingStep -> Page {
        Search = "search": Vec<String>,
        SeatSelection = "seatSelection": Vec<i64>,
        Payment = "payment": String,
        Confirmation = "confirmation": bool,
    }
}

impl BookingStep {
    pub fn search() -> Self {
        Self::Search(Initializer::new(|terms: Vec<String>| Page::Search(SearchPage { terms })))
    }

    pub fn seat_selection() -> Self {
        Self::SeatSelection(Initializer::new(|seats: Vec<i64>| Page::SeatSelection(SeatSelectionPage { seats })))
    }

    pub fn payment() -> Self {
        Self::Payment(Initializer::new(|reference: String| Page::Payment(PaymentPage { reference })))
    }

    pub fn confirmation() -> Self {
        Self::Confirmation(Initializer::new(|confirmed: bool| Page::Confirmation(ConfirmationPage { confirmed })))
    }

    /// Step con su fábrica por defecto a partir del id.
    pub fn from_id(step_id: &str) -> Result<Self, BookingError> {
        match step_id {
            "search" => Ok(Self::search()),
            "seatSelection" => Ok(Self::seat_selection()),
            "payment" => Ok(Self::payment()),
            "confirmation" => Ok(Self::confirmation()),
            other => Err(BookingError::UnknownStep(other.to_string())),
        }
    }

    /// Los cuatro steps en el orden habitual.
    pub fn standard_flow() -> Vec<Self> {
        Self::IDS.iter().filter_map(|id| Self::from_id(id).ok()).collect()
    }

    /// Secuencia de steps a partir de ids; falla en el primer id desconocido.
    pub fn flow_from_ids<T: AsRef<str>>(ids: &[T]) -> Result<Vec<Self>, BookingError> {
        ids.iter().map(|id| Self::from_id(id.as_ref())).collect()
    }

    /// Invoca la fábrica del step con el input que le corresponde.
    pub fn present(&self, inputs: &BookingInputs) -> Page {
        match self {
            Self::Search(init) => init.call(inputs.search_terms.clone()),
            Self::SeatSelection(init) => init.call(inputs.seats.clone()),
            Self::Payment(init) => init.call(inputs.payment_reference.clone()),
            Self::Confirmation(init) => init.call(inputs.confirmed),
        }
    }
}
