//! Controllers MVC
//!
//! Orquestan validación, numeración de documentos, derivación de estados
//! y armado de DTOs sobre los repositorios.

pub mod company_controller;
pub mod invoice_controller;
pub mod job_controller;
pub mod motor_controller;
pub mod user_controller;
pub mod warranty_controller;
