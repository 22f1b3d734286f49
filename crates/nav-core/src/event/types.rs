//! Tipos de evento de navegación y estructura `NavEvent`.
//!
//! Rol en el flujo:
//! - Cada movimiento del `FlowController` emite un evento a un `EventStore`
//!   append-only.
//! - Estos eventos permiten reconstruir el cursor vía `FlowRepository`
//!   (replay) sin leer el estado mutable del controlador.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::UnknownSkipPolicy;

/// Cómo se llegó a un step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Avance simple al siguiente índice.
    Next,
    /// Salto directo a un step nombrado (hacia delante o hacia atrás).
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEventKind {
    /// Primer evento de una sesión. Fija la definición y el step inicial
    /// (el cursor arranca en 0).
    FlowInitialized {
        definition_hash: String,
        step_count: usize,
        first_step: String,
    },
    /// El cursor pasó de `from_index` a `step_index`.
    StepEntered {
        from_index: usize,
        step_index: usize,
        step_id: String,
        transition: Transition,
    },
    /// Se pidió avanzar estando en el último step; el cursor no cambia.
    /// Se registra una vez por visita al último step.
    TerminalHeld { step_index: usize, step_id: String },
    /// `skip_to` con un id no declarado. Lo que sigue depende de `policy`.
    SkipUnresolved {
        requested: String,
        from_index: usize,
        policy: UnknownSkipPolicy,
    },
}

impl NavEventKind {
    /// Nombre corto de la variante, para logs.
    pub fn variant_name(&self) -> &'static str {
        match self {
            NavEventKind::FlowInitialized { .. } => "FlowInitialized",
            NavEventKind::StepEntered { .. } => "StepEntered",
            NavEventKind::TerminalHeld { .. } => "TerminalHeld",
            NavEventKind::SkipUnresolved { .. } => "SkipUnresolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub flow_id: Uuid,
    pub kind: NavEventKind,
    pub ts: DateTime<Utc>,
}
