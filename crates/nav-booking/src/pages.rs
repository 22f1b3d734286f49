//! Páginas que producen las fábricas de cada step.
//!
//! Son objetos de presentación inertes: guardan el input recibido y se
//! serializan para mostrarse.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatSelectionPage {
    pub seats: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentPage {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationPage {
    pub confirmed: bool,
}

/// Página ya construida, lista para presentarse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum Page {
    Search(SearchPage),
    SeatSelection(SeatSelectionPage),
    Payment(PaymentPage),
    Confirmation(ConfirmationPage),
}

impl Page {
    /// Id del step que produjo la página.
    pub fn step_id(&self) -> &'static str {
        match self {
            Page::Search(_) => "search",
            Page::SeatSelection(_) => "seatSelection",
            Page::Payment(_) => "payment",
            Page::Confirmation(_) => "confirmation",
        }
    }
}
