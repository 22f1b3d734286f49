use serde::{Deserialize, Serialize};

/// Inputs que la capa de UI entrega a cada fábrica.
///
/// El controlador de flujo nunca los fabrica; el `Navigator` los toma de aquí
/// al presentar cada step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingInputs {
    pub search_terms: Vec<String>,
    pub seats: Vec<i64>,
    pub payment_reference: String,
    pub confirmed: bool,
}

impl Default for BookingInputs {
    fn default() -> Self {
        Self { search_terms: vec!["one".to_string(), "two".to_string()],
               seats: vec![1, 2, 3],
               payment_reference: "hello world".to_string(),
               confirmed: true }
    }
}
