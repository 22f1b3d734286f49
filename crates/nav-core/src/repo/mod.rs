pub mod definition;
pub mod types;

pub use definition::FlowDefinition;
pub use types::{EventReplayRepository, FlowInstance, FlowRepository, StepSlot, StepStatus};
