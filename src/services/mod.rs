//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación:
//! numeración de documentos, derivación de estados, aritmética de
//! garantías y cálculo monetario.

pub mod billing;
pub mod document_number;
pub mod status;
pub mod warranty_extension;
