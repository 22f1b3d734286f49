//! Configuración de la aplicación.
//! Carga variables de entorno (.env incluido) y arma un `AppConfig` inmutable
//! con la secuencia de steps, la política de saltos y los inputs de cada step.
use dotenvy::dotenv;
use nav_booking::{BookingInputs, BookingStep};
use nav_core::UnknownSkipPolicy;
use once_cell::sync::Lazy;
use std::env;

use crate::errors::AppError;

pub const ENV_STEPS: &str = "NAVFLOW_STEPS";
pub const ENV_UNKNOWN_SKIP: &str = "NAVFLOW_UNKNOWN_SKIP";
pub const ENV_SEARCH_TERMS: &str = "NAVFLOW_SEARCH_TERMS";
pub const ENV_SEATS: &str = "NAVFLOW_SEATS";
pub const ENV_PAYMENT_REFERENCE: &str = "NAVFLOW_PAYMENT_REFERENCE";
pub const ENV_CONFIRMED: &str = "NAVFLOW_CONFIRMED";
pub const ENV_LOG: &str = "NAVFLOW_LOG";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

/// Configuración global de la aplicación.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub flow: FlowConfig,
    /// Inputs que el navegador entrega a cada fábrica.
    pub inputs: BookingInputs,
    /// Filtro para el subscriber de logs (sintaxis `EnvFilter`).
    pub log_filter: String,
}

/// Forma del flujo.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Ids en orden. Vacío es un error de configuración al construir el flujo.
    pub steps: Vec<String>,
    pub unknown_skip: UnknownSkipPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de `lookup`; útil en tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let steps = match lookup(ENV_STEPS) {
            Some(v) => split_list(&v),
            None => BookingStep::IDS.iter().map(|s| s.to_string()).collect(),
        };
        let unknown_skip = match lookup(ENV_UNKNOWN_SKIP) {
            Some(v) => v.parse::<UnknownSkipPolicy>().map_err(|e| AppError::Config(format!("{ENV_UNKNOWN_SKIP}: {e}")))?,
            None => UnknownSkipPolicy::default(),
        };

        let mut inputs = BookingInputs::default();
        if let Some(v) = lookup(ENV_SEARCH_TERMS) {
            inputs.search_terms = split_list(&v);
        }
        if let Some(v) = lookup(ENV_SEATS) {
            inputs.seats = split_list(&v).iter()
                                         .map(|s| {
                                             s.parse::<i64>()
                                              .map_err(|_| AppError::Config(format!("{ENV_SEATS}: valor inválido '{s}'")))
                                         })
                                         .collect::<Result<_, _>>()?;
        }
        if let Some(v) = lookup(ENV_PAYMENT_REFERENCE) {
            inputs.payment_reference = v;
        }
        if let Some(v) = lookup(ENV_CONFIRMED) {
            inputs.confirmed = parse_bool(&v).ok_or_else(|| AppError::Config(format!("{ENV_CONFIRMED}: valor inválido '{v}'")))?;
        }

        let log_filter = lookup(ENV_LOG).unwrap_or_else(|| "info".to_string());

        Ok(Self { flow: FlowConfig { steps, unknown_skip },
                  inputs,
                  log_filter })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.flow.steps, vec!["search", "seatSelection", "payment", "confirmation"]);
        assert_eq!(cfg.flow.unknown_skip, UnknownSkipPolicy::Reject);
        assert_eq!(cfg.inputs, BookingInputs::default());
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = AppConfig::from_lookup(lookup_from(&[(ENV_STEPS, "search, payment"),
                                                        (ENV_UNKNOWN_SKIP, "advance"),
                                                        (ENV_SEATS, "4, 5"),
                                                        (ENV_CONFIRMED, "no"),
                                                        (ENV_PAYMENT_REFERENCE, "PNR-77")])).unwrap();
        assert_eq!(cfg.flow.steps, vec!["search", "payment"]);
        assert_eq!(cfg.flow.unknown_skip, UnknownSkipPolicy::AdvanceByOne);
        assert_eq!(cfg.inputs.seats, vec![4, 5]);
        assert!(!cfg.inputs.confirmed);
        assert_eq!(cfg.inputs.payment_reference, "PNR-77");
    }

    #[test]
    fn empty_step_list_is_kept_empty() {
        let cfg = AppConfig::from_lookup(lookup_from(&[(ENV_STEPS, " , ")])).unwrap();
        assert!(cfg.flow.steps.is_empty());
    }

    #[test]
    fn bad_values_are_config_errors() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_SEATS, "1,A2")])).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("A2")));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_UNKNOWN_SKIP, "ignore")])).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("ignore")));
    }
}
