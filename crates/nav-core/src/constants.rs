//! Constantes del núcleo de navegación.
//!
//! `ENGINE_VERSION` entra en el cálculo del `definition_hash`: dos flujos con
//! los mismos ids pero versiones distintas del motor no comparten hash.

/// Versión lógica del controlador de flujo.
pub const ENGINE_VERSION: &str = "N1.0";
