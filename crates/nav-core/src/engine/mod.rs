//! Controlador de flujo: cursor sobre una secuencia fija de steps.
//!
//! Provee el controlador, su builder y la política para saltos a ids no
//! declarados.

pub mod builder;
pub mod core;
pub mod policy;

pub use builder::{FlowBuilder, FlowBuilderInit};
pub use self::core::FlowController;
pub use policy::UnknownSkipPolicy;
