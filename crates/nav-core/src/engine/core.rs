//! Core FlowController implementation

use std::borrow::Cow;

use log::{debug, warn};
use uuid::Uuid;

use crate::engine::UnknownSkipPolicy;
use crate::errors::CoreEngineError;
use crate::event::{EventStore, InMemoryEventStore, NavEvent, NavEventKind, Transition};
use crate::repo::{EventReplayRepository, FlowDefinition, FlowInstance, FlowRepository};
use crate::step::StepDefinition;

/// Controlador de una sesión de navegación.
///
/// Mantiene un cursor sobre una `FlowDefinition` inmutable. El cursor arranca
/// en 0 y siempre es un índice válido: avanzar desde el último step no lo
/// mueve. Las únicas mutaciones son `advance`, `skip_to` y `next`, todas con
/// `&mut self`, así que el borrow checker impone un único escritor.
#[derive(Debug)]
pub struct FlowController<S, E = InMemoryEventStore>
    where S: StepDefinition,
          E: EventStore
{
    definition: FlowDefinition<S>,
    cursor: usize,
    flow_id: Uuid,
    event_store: E,
    unknown_skip: UnknownSkipPolicy,
    // TerminalHeld ya registrado en la visita actual al último step.
    terminal_held: bool,
}

impl<S: StepDefinition> FlowController<S> {
    /// Crea un controlador con store en memoria. Falla con `EmptyFlow` si
    /// `steps` está vacío.
    pub fn new(steps: Vec<S>) -> Result<Self, CoreEngineError> {
        Self::with_store(steps, InMemoryEventStore::default())
    }
}

impl<S, E> FlowController<S, E>
    where S: StepDefinition,
          E: EventStore
{
    /// Crea un controlador con el store proporcionado.
    pub fn with_store(steps: Vec<S>, event_store: E) -> Result<Self, CoreEngineError> {
        let definition = FlowDefinition::new(steps)?;
        Ok(Self::from_definition(definition, event_store))
    }

    /// Abre una sesión nueva sobre una definición ya validada.
    pub fn from_definition(definition: FlowDefinition<S>, event_store: E) -> Self {
        let mut controller = Self { definition,
                                    cursor: 0,
                                    flow_id: Uuid::new_v4(),
                                    event_store,
                                    unknown_skip: UnknownSkipPolicy::default(),
                                    terminal_held: false };
        let first_step = controller.definition.first().id().to_string();
        debug!("flow init flow_id={} steps={} first={first_step}",
               controller.flow_id,
               controller.definition.len());
        let kind = NavEventKind::FlowInitialized { definition_hash: controller.definition.definition_hash.clone(),
                                                   step_count: controller.definition.len(),
                                                   first_step };
        controller.event_store.append_kind(controller.flow_id, kind);
        controller
    }

    pub fn with_unknown_skip_policy(mut self, policy: UnknownSkipPolicy) -> Self {
        self.unknown_skip = policy;
        self
    }

    /// Primer step declarado (la página inicial de la sesión).
    pub fn start(&self) -> &S {
        self.definition.first()
    }

    /// Avanza al siguiente step o salta a `skip_to` y devuelve el step en el
    /// nuevo cursor.
    ///
    /// - `skip_to` declarado: el cursor pasa a su posición, hacia delante o
    ///   hacia atrás. La comparación es por id.
    /// - `skip_to` no declarado: según `UnknownSkipPolicy`, error
    ///   `UnknownStep` (cursor intacto) o avance simple.
    /// - Sin `skip_to`: cursor + 1, salvo en el último step, donde se queda.
    pub fn advance(&mut self, skip_to: Option<&S>) -> Result<&S, CoreEngineError> {
        self.advance_by_id(skip_to.map(|s| s.id()))
    }

    /// Igual que `advance(Some(..))` pero recibe el id directamente.
    pub fn skip_to(&mut self, step_id: &str) -> Result<&S, CoreEngineError> {
        self.advance_by_id(Some(step_id))
    }

    /// Avance simple; nunca falla.
    pub fn next(&mut self) -> &S {
        self.step_forward();
        self.current()
    }

    fn advance_by_id(&mut self, skip_to: Option<&str>) -> Result<&S, CoreEngineError> {
        let target = match skip_to {
            Some(step_id) => match self.definition.position(step_id) {
                Some(idx) => Some(idx),
                None => {
                    self.unresolved_skip(step_id)?;
                    None
                }
            },
            None => None,
        };
        match target {
            Some(idx) => self.enter(idx, Transition::Skip),
            None => self.step_forward(),
        }
        Ok(self.current())
    }

    fn unresolved_skip(&mut self, requested: &str) -> Result<(), CoreEngineError> {
        let policy = self.unknown_skip;
        self.event_store.append_kind(self.flow_id,
                                     NavEventKind::SkipUnresolved { requested: requested.to_string(),
                                                                    from_index: self.cursor,
                                                                    policy });
        match policy {
            UnknownSkipPolicy::Reject => {
                warn!("skip rejected flow_id={} requested={requested} cursor={}", self.flow_id, self.cursor);
                Err(CoreEngineError::UnknownStep(requested.to_string()))
            }
            UnknownSkipPolicy::AdvanceByOne => {
                debug!("skip unresolved flow_id={} requested={requested}, advancing by one", self.flow_id);
                Ok(())
            }
        }
    }

    fn step_forward(&mut self) {
        let candidate = self.cursor + 1;
        if candidate < self.definition.len() {
            self.enter(candidate, Transition::Next);
        } else if !self.terminal_held {
            let step_id = self.current().id().to_string();
            debug!("terminal hold flow_id={} step={step_id}", self.flow_id);
            self.event_store.append_kind(self.flow_id,
                                         NavEventKind::TerminalHeld { step_index: self.cursor,
                                                                      step_id });
            self.terminal_held = true;
        }
    }

    fn enter(&mut self, target: usize, transition: Transition) {
        let from_index = self.cursor;
        self.cursor = target;
        self.terminal_held = false;
        let step_id = self.current().id().to_string();
        debug!("enter flow_id={} {from_index} -> {target} ({transition:?}) step={step_id}",
               self.flow_id);
        self.event_store.append_kind(self.flow_id,
                                     NavEventKind::StepEntered { from_index,
                                                                 step_index: target,
                                                                 step_id,
                                                                 transition });
    }

    /// Step en el cursor.
    pub fn current(&self) -> &S {
        &self.definition.steps()[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step_count(&self) -> usize {
        self.definition.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.definition.last_index()
    }

    pub fn definition(&self) -> &FlowDefinition<S> {
        &self.definition
    }

    pub fn flow_id(&self) -> Uuid {
        self.flow_id
    }

    pub fn unknown_skip_policy(&self) -> UnknownSkipPolicy {
        self.unknown_skip
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Eventos de esta sesión, en orden. Con `InMemoryEventStore` es un
    /// préstamo del log, sin copia.
    pub fn events(&self) -> Cow<'_, [NavEvent]> {
        self.event_store.events(self.flow_id)
    }

    /// Estado reconstruido desde el log de eventos.
    pub fn snapshot(&self) -> Result<FlowInstance, CoreEngineError> {
        self.snapshot_with(&EventReplayRepository::new())
    }

    pub fn snapshot_with<R: FlowRepository>(&self, repository: &R) -> Result<FlowInstance, CoreEngineError> {
        repository.load(self.flow_id, &self.events(), &self.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKING: [&str; 4] = ["search", "seatSelection", "payment", "confirmation"];

    fn booking() -> FlowController<&'static str> {
        FlowController::new(BOOKING.to_vec()).expect("non-empty flow")
    }

    #[test]
    fn empty_flow_fails_at_construction() {
        let err = FlowController::<String>::new(vec![]).unwrap_err();
        assert_eq!(err, CoreEngineError::EmptyFlow);
    }

    #[test]
    fn start_returns_first_step_and_cursor_is_zero() {
        let flow = booking();
        assert_eq!(*flow.start(), "search");
        assert_eq!(flow.cursor(), 0);
        assert_eq!(*flow.current(), "search");
    }

    #[test]
    fn skip_then_advance_holds_at_terminal() {
        let mut flow = booking();
        assert_eq!(*flow.start(), "search");
        assert_eq!(*flow.advance(Some(&"payment")).unwrap(), "payment");
        assert_eq!(flow.cursor(), 2);
        assert_eq!(*flow.advance(None).unwrap(), "confirmation");
        assert_eq!(flow.cursor(), 3);
        assert_eq!(*flow.advance(None).unwrap(), "confirmation");
        assert_eq!(flow.cursor(), 3);
        assert!(flow.is_at_end());
    }

    #[test]
    fn single_step_flow_never_moves() {
        let mut flow = FlowController::new(vec!["search"]).unwrap();
        assert_eq!(*flow.start(), "search");
        assert_eq!(*flow.advance(None).unwrap(), "search");
        assert_eq!(*flow.next(), "search");
        assert_eq!(flow.cursor(), 0);
    }

    #[test]
    fn skip_can_jump_backwards() {
        let mut flow = booking();
        flow.skip_to("confirmation").unwrap();
        assert_eq!(flow.cursor(), 3);
        assert_eq!(*flow.skip_to("seatSelection").unwrap(), "seatSelection");
        assert_eq!(flow.cursor(), 1);
    }

    #[test]
    fn unknown_skip_is_rejected_by_default() {
        let mut flow = booking();
        flow.next();
        let err = flow.skip_to("refund").unwrap_err();
        assert_eq!(err, CoreEngineError::UnknownStep("refund".into()));
        assert_eq!(flow.cursor(), 1);
        assert!(flow.events()
                    .iter()
                    .any(|e| matches!(&e.kind, NavEventKind::SkipUnresolved { requested, .. } if requested == "refund")));
    }

    #[test]
    fn unknown_skip_advances_when_configured() {
        let mut flow = booking().with_unknown_skip_policy(UnknownSkipPolicy::AdvanceByOne);
        assert_eq!(*flow.skip_to("refund").unwrap(), "seatSelection");
        flow.skip_to("confirmation").unwrap();
        assert_eq!(*flow.skip_to("refund").unwrap(), "confirmation");
    }

    #[test]
    fn events_record_each_move() {
        let mut flow = booking();
        flow.skip_to("payment").unwrap();
        flow.next();
        flow.next();

        let kinds: Vec<&'static str> = flow.events().iter().map(|e| e.kind.variant_name()).collect();
        assert_eq!(kinds, vec!["FlowInitialized", "StepEntered", "StepEntered", "TerminalHeld"]);

        let seqs: Vec<u64> = flow.events().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3]);
        assert!(flow.events().iter().all(|e| e.flow_id == flow.flow_id()));
    }

    #[test]
    fn snapshot_agrees_with_cursor() {
        let mut flow = booking();
        flow.skip_to("payment").unwrap();
        flow.skip_to("search").unwrap();
        flow.next();

        let snap = flow.snapshot().expect("own log matches own definition");
        assert_eq!(snap.cursor, flow.cursor());
        assert_eq!(snap.id, flow.flow_id());
        assert_eq!(snap.steps[0].visits, 2);
        assert!(!snap.terminal_reached);
    }

    #[test]
    fn terminal_hold_is_recorded_once_per_visit() {
        let mut flow = booking();
        flow.skip_to("confirmation").unwrap();
        for _ in 0..5 {
            flow.next();
        }
        flow.skip_to("payment").unwrap();
        flow.next();
        flow.next();
        flow.next();

        let holds: Vec<u64> = flow.events()
                                  .iter()
                                  .filter(|e| matches!(e.kind, NavEventKind::TerminalHeld { .. }))
                                  .map(|e| e.seq)
                                  .collect();
        assert_eq!(holds, vec![2, 5]);
        assert_eq!(flow.events().len(), 6);
        assert!(flow.snapshot().unwrap().terminal_reached);
    }

    #[test]
    fn single_step_flow_holds_once() {
        let mut flow = FlowController::new(vec!["search"]).unwrap();
        flow.next();
        flow.next();
        let kinds: Vec<&'static str> = flow.events().iter().map(|e| e.kind.variant_name()).collect();
        assert_eq!(kinds, vec!["FlowInitialized", "TerminalHeld"]);
    }

    #[test]
    fn replaying_into_another_definition_fails() {
        let mut flow = booking();
        flow.skip_to("confirmation").unwrap();

        let other = FlowDefinition::new(vec!["search", "payment"]).unwrap();
        let err = EventReplayRepository::new().load(flow.flow_id(), &flow.events(), &other)
                                              .unwrap_err();
        assert!(matches!(err, CoreEngineError::DefinitionMismatch { .. }));
        assert_eq!(flow.snapshot().unwrap().cursor, 3);
    }

    #[test]
    fn sessions_get_distinct_flow_ids() {
        assert_ne!(booking().flow_id(), booking().flow_id());
    }
}
