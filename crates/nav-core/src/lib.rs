//! nav-core: controlador de flujo lineal con saltos nombrados.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod repo;
pub mod step;

pub use engine::{FlowBuilder, FlowBuilderInit, FlowController, UnknownSkipPolicy};
pub use errors::CoreEngineError;
pub use event::{EventStore, InMemoryEventStore, NavEvent, NavEventKind, Transition};
pub use repo::{EventReplayRepository, FlowDefinition, FlowInstance, FlowRepository, StepSlot, StepStatus};
pub use step::{Initializer, StepDefinition};
