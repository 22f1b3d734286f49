//! Estado reconstruido de una sesión (`FlowInstance`) a partir de su log.
//!
//! El repositorio aplica un replay lineal: consume los eventos en orden y
//! actualiza los slots de cada step. No toca el controlador; sirve para
//! auditar la sesión o verificar que el cursor observado coincide con el log.
//! Un log abierto con otra definición (hash o número de steps) se rechaza
//! con `DefinitionMismatch` antes de aplicar ningún movimiento.
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::FlowDefinition;
use crate::errors::CoreEngineError;
use crate::event::{NavEvent, NavEventKind};
use crate::step::StepDefinition;

/// Estado de un step dentro de la sesión.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Nunca se entró al step.
    Pending,
    /// El cursor está en este step.
    Current,
    /// Se entró y luego se salió (avance o salto).
    Visited,
}

#[derive(Debug, Clone)]
pub struct StepSlot {
    pub step_id: String,
    pub status: StepStatus,
    pub visits: u32,
    pub entered_at: Option<DateTime<Utc>>,
    pub left_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct FlowInstance {
    pub id: Uuid,
    pub steps: Vec<StepSlot>,
    pub cursor: usize,
    /// Hubo al menos un intento de avanzar más allá del último step.
    pub terminal_reached: bool,
}

impl FlowInstance {
    /// Ids anteriores al cursor en los que nunca se entró (saltados).
    pub fn skipped(&self) -> Vec<&str> {
        self.steps[..self.cursor.min(self.steps.len())].iter()
                                                       .filter(|s| s.status == StepStatus::Pending)
                                                       .map(|s| s.step_id.as_str())
                                                       .collect()
    }

    pub fn current(&self) -> Option<&StepSlot> {
        self.steps.get(self.cursor)
    }
}

/// Trait para reconstruir (`replay`) el estado de una sesión a partir de eventos.
pub trait FlowRepository {
    fn load<S: StepDefinition>(&self,
                               flow_id: Uuid,
                               events: &[NavEvent],
                               definition: &FlowDefinition<S>)
                               -> Result<FlowInstance, CoreEngineError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EventReplayRepository;

impl EventReplayRepository {
    pub fn new() -> Self {
        Self
    }
}

impl FlowRepository for EventReplayRepository {
    fn load<S: StepDefinition>(&self,
                               flow_id: Uuid,
                               events: &[NavEvent],
                               definition: &FlowDefinition<S>)
                               -> Result<FlowInstance, CoreEngineError> {
        let mut steps: Vec<StepSlot> = definition.steps()
                                                 .iter()
                                                 .map(|s| StepSlot { step_id: s.id().to_string(),
                                                                     status: StepStatus::Pending,
                                                                     visits: 0,
                                                                     entered_at: None,
                                                                     left_at: None })
                                                 .collect();
        let mut cursor = 0;
        let mut terminal_reached = false;
        for ev in events.iter().filter(|e| e.flow_id == flow_id) {
            match &ev.kind {
                NavEventKind::FlowInitialized { definition_hash, step_count, .. } => {
                    check_definition(definition, definition_hash, *step_count)?;
                    cursor = 0;
                    if let Some(slot) = steps.get_mut(0) {
                        slot.status = StepStatus::Current;
                        slot.visits += 1;
                        slot.entered_at = Some(ev.ts);
                    }
                }
                NavEventKind::StepEntered { from_index, step_index, .. } => {
                    if from_index != step_index {
                        if let Some(slot) = steps.get_mut(*from_index) {
                            slot.status = StepStatus::Visited;
                            slot.left_at = Some(ev.ts);
                        }
                    }
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Current;
                        slot.visits += 1;
                        slot.entered_at = Some(ev.ts);
                        cursor = *step_index;
                    }
                }
                NavEventKind::TerminalHeld { .. } => terminal_reached = true,
                NavEventKind::SkipUnresolved { .. } => {}
            }
        }
        Ok(FlowInstance { id: flow_id,
                          steps,
                          cursor,
                          terminal_reached })
    }
}

fn check_definition<S: StepDefinition>(definition: &FlowDefinition<S>,
                                       logged_hash: &str,
                                       logged_steps: usize)
                                       -> Result<(), CoreEngineError> {
    if logged_steps != definition.len() {
        return Err(CoreEngineError::DefinitionMismatch { expected: format!("steps={}", definition.len()),
                                                         found: format!("steps={logged_steps}") });
    }
    if logged_hash != definition.definition_hash {
        return Err(CoreEngineError::DefinitionMismatch { expected: format!("hash={}", definition.definition_hash),
                                                         found: format!("hash={logged_hash}") });
    }
    Ok(())
}
