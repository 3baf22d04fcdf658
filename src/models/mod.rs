//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar. Los campos de
//! estado son enums cerrados almacenados como texto.

pub mod company;
pub mod invoice;
pub mod job;
pub mod motor;
pub mod user;
pub mod warranty;
