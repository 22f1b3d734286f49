use chrono::Utc;
use log::debug;
use std::borrow::Cow;
use std::collections::HashMap;
use uuid::Uuid;

use super::{NavEvent, NavEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, flow_id: Uuid, kind: NavEventKind) -> NavEvent;
    /// Lista eventos de un flujo (orden ascendente por seq).
    fn list(&self, flow_id: Uuid) -> Vec<NavEvent>;
    /// Vista de los eventos de un flujo. Los stores que guardan el log en
    /// memoria lo prestan sin copiarlo.
    fn events(&self, flow_id: Uuid) -> Cow<'_, [NavEvent]> {
        Cow::Owned(self.list(flow_id))
    }
}

/// Store en memoria. El log solo crece por `append_kind`; no hay forma de
/// reescribir eventos ya registrados.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: HashMap<Uuid, Vec<NavEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, flow_id: Uuid, kind: NavEventKind) -> NavEvent {
        let events = self.inner.entry(flow_id).or_default();
        let seq = events.len() as u64;
        debug!("append_kind flow_id={flow_id} seq={seq} kind={}", kind.variant_name());
        let ev = NavEvent { seq, flow_id, kind, ts: Utc::now() };
        events.push(ev.clone());
        ev
    }

    fn list(&self, flow_id: Uuid) -> Vec<NavEvent> {
        self.inner.get(&flow_id).cloned().unwrap_or_default()
    }

    fn events(&self, flow_id: Uuid) -> Cow<'_, [NavEvent]> {
        match self.inner.get(&flow_id) {
            Some(events) => Cow::Borrowed(events.as_slice()),
            None => Cow::Borrowed(&[]),
        }
    }
}
