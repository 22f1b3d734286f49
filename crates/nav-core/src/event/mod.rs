//! Definiciones de eventos de navegación y trait EventStore.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{NavEvent, NavEventKind, Transition};
