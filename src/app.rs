//! Sesión de demostración: construye el flujo desde la configuración y lo
//! recorre con una lista de "taps".
use log::info;
use nav_booking::{BookingStep, Navigator, Presenter};
use nav_core::{FlowController, FlowInstance, StepDefinition};
use std::fmt;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Una interacción del usuario con el asistente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tap {
    /// Botón "siguiente".
    Next,
    /// Salto directo a un step por id.
    Skip(String),
}

impl FromStr for Tap {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "next" => Ok(Tap::Next),
            other => match other.strip_prefix("skip:") {
                Some(id) if !id.trim().is_empty() => Ok(Tap::Skip(id.trim().to_string())),
                _ => Err(AppError::InvalidTap(other.to_string())),
            },
        }
    }
}

impl fmt::Display for Tap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tap::Next => f.write_str("next"),
            Tap::Skip(id) => write!(f, "skip:{id}"),
        }
    }
}

/// Guion por defecto: saltar a pago y luego avanzar.
pub fn demo_script() -> Vec<Tap> {
    vec![Tap::Skip("payment".to_string()), Tap::Next]
}

pub fn parse_taps<T: AsRef<str>>(args: &[T]) -> Result<Vec<Tap>, AppError> {
    args.iter().map(|a| a.as_ref().parse()).collect()
}

/// Construye el navegador. Falla con `EmptyFlow` si la configuración no
/// declara steps, antes de presentar nada.
pub fn build_navigator<P: Presenter>(config: &AppConfig, presenter: P) -> Result<Navigator<P>, AppError> {
    let steps = BookingStep::flow_from_ids(&config.flow.steps)?;
    let flow = FlowController::new(steps)?.with_unknown_skip_policy(config.flow.unknown_skip);
    info!("flow ready flow_id={} steps={:?} unknown_skip={}",
          flow.flow_id(),
          flow.definition().step_ids().collect::<Vec<_>>(),
          flow.unknown_skip_policy());
    Ok(Navigator::new(flow, config.inputs.clone(), presenter))
}

/// Presenta la página inicial, aplica cada tap en orden y devuelve el estado
/// reconstruido de la sesión.
pub fn run<P: Presenter>(config: &AppConfig, taps: &[Tap], presenter: P) -> Result<FlowInstance, AppError> {
    let mut nav = build_navigator(config, presenter)?;
    nav.start()?;
    for tap in taps {
        match tap {
            Tap::Next => nav.did_tap_next(None)?,
            Tap::Skip(id) => nav.did_tap_skip(id)?,
        };
    }
    let snapshot = nav.flow().snapshot()?;
    info!("session done flow_id={} final={} skipped={:?}",
          snapshot.id,
          nav.flow().current().id(),
          snapshot.skipped());
    Ok(snapshot)
}
