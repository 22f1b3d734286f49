//! Definición inmutable del Flow.
//!
//! Guarda los steps en el orden declarado y un índice `id -> posición`. Si un
//! id aparece más de una vez, el índice conserva la primera posición: un salto
//! a ese id siempre cae en su primera aparición.
use indexmap::IndexMap;
use serde_json::json;

use crate::constants::ENGINE_VERSION;
use crate::errors::CoreEngineError;
use crate::hashing::hash_value;
use crate::step::StepDefinition;

#[derive(Debug, Clone)]
pub struct FlowDefinition<S> {
    steps: Vec<S>,
    index: IndexMap<String, usize>,
    pub definition_hash: String,
}

impl<S: StepDefinition> FlowDefinition<S> {
    /// Construye la definición. Falla con `EmptyFlow` si no hay steps.
    pub fn new(steps: Vec<S>) -> Result<Self, CoreEngineError> {
        let mut steps = steps.into_iter();
        let first = steps.next().ok_or(CoreEngineError::EmptyFlow)?;
        Ok(Self::with_first(first, steps))
    }

    /// Variante infalible: el primer step es obligatorio por firma.
    pub fn with_first(first: S, rest: impl IntoIterator<Item = S>) -> Self {
        let steps: Vec<S> = std::iter::once(first).chain(rest).collect();
        let mut index = IndexMap::with_capacity(steps.len());
        for (pos, step) in steps.iter().enumerate() {
            index.entry(step.id().to_string()).or_insert(pos);
        }
        let ids: Vec<&str> = steps.iter().map(|s| s.id()).collect();
        let definition_hash = hash_value(&json!({
            "engine_version": ENGINE_VERSION,
            "step_ids": ids,
        }));
        Self { steps, index, definition_hash }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Siempre `false`: una definición construida tiene al menos un step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> &S {
        &self.steps[0]
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn get(&self, idx: usize) -> Option<&S> {
        self.steps.get(idx)
    }

    /// Posición declarada (primera aparición) de un id.
    pub fn position(&self, step_id: &str) -> Option<usize> {
        self.index.get(step_id).copied()
    }

    pub fn contains(&self, step_id: &str) -> bool {
        self.index.contains_key(step_id)
    }

    /// Ids distintos, en orden de primera aparición.
    pub fn step_ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }
}
