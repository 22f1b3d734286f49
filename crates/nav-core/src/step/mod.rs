//! Definiciones relacionadas a Steps.
//!
//! Un Step es una etapa nombrada del flujo. Su `id` es la única identidad que
//! el controlador usa para enrutar; la fábrica tipada que cada variante lleva
//! (`Initializer`) es opaca para el núcleo. Este módulo define:
//! - `StepDefinition`: interfaz neutral usada por el controlador.
//! - `Initializer`: fábrica `Input -> Page` almacenada por variante.
//! - `flow_steps!`: macro para declarar un enum de steps tipados.

pub mod definition;
pub mod initializer;
pub mod macros;

pub use definition::StepDefinition;
pub use initializer::Initializer;
