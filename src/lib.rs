//! navflow
//!
//! Librería de la demo de navegación por pasos:
//! - `config`: carga de configuración desde el entorno.
//! - `errors`: errores de la aplicación.
//! - `app`: arma el flujo de reserva y lo recorre con una lista de taps.
//!
//! El controlador genérico vive en `nav-core` y el asistente concreto en
//! `nav-booking`.

pub mod app;
pub mod config;
pub mod errors;
