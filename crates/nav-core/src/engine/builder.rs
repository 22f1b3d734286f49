//! Builder para `FlowController`.
//!
//! El builder obliga a declarar el primer step antes de poder construir, así
//! que un flujo vacío no es expresable por esta vía (a diferencia de
//! `FlowController::new`, que lo rechaza en runtime con `EmptyFlow`).
//!
//! ```ignore
//! let flow = FlowBuilderInit::new()
//!     .first_step(BookingStep::search())
//!     .add_step(BookingStep::payment())
//!     .unknown_skip(UnknownSkipPolicy::AdvanceByOne)
//!     .build();
//! ```

use crate::engine::{FlowController, UnknownSkipPolicy};
use crate::event::{EventStore, InMemoryEventStore};
use crate::repo::FlowDefinition;
use crate::step::StepDefinition;

/// Estado inicial del builder: store y política, todavía sin steps.
#[derive(Debug)]
pub struct FlowBuilderInit<E: EventStore> {
    event_store: E,
    unknown_skip: UnknownSkipPolicy,
}

impl FlowBuilderInit<InMemoryEventStore> {
    pub fn new() -> Self {
        Self::with_store(InMemoryEventStore::default())
    }
}

impl Default for FlowBuilderInit<InMemoryEventStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventStore> FlowBuilderInit<E> {
    pub fn with_store(event_store: E) -> Self {
        Self { event_store,
               unknown_skip: UnknownSkipPolicy::default() }
    }

    /// Define el primer step y transiciona al builder completo.
    #[inline]
    pub fn first_step<S: StepDefinition>(self, step: S) -> FlowBuilder<S, E> {
        FlowBuilder { event_store: self.event_store,
                      unknown_skip: self.unknown_skip,
                      first: step,
                      rest: Vec::new() }
    }
}

/// Builder con al menos un step declarado.
#[derive(Debug)]
pub struct FlowBuilder<S: StepDefinition, E: EventStore> {
    event_store: E,
    unknown_skip: UnknownSkipPolicy,
    first: S,
    rest: Vec<S>,
}

impl<S: StepDefinition, E: EventStore> FlowBuilder<S, E> {
    /// Añade el siguiente step al final del flujo.
    #[inline]
    pub fn add_step(mut self, next: S) -> Self {
        self.rest.push(next);
        self
    }

    #[inline]
    pub fn extend(mut self, steps: impl IntoIterator<Item = S>) -> Self {
        self.rest.extend(steps);
        self
    }

    #[inline]
    pub fn unknown_skip(mut self, policy: UnknownSkipPolicy) -> Self {
        self.unknown_skip = policy;
        self
    }

    /// Construye el controlador y abre la sesión (emite `FlowInitialized`).
    pub fn build(self) -> FlowController<S, E> {
        let definition = FlowDefinition::with_first(self.first, self.rest);
        FlowController::from_definition(definition, self.event_store).with_unknown_skip_policy(self.unknown_skip)
    }
}
