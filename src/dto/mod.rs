//! DTOs de la API
//!
//! Requests con validación declarativa y responses con los campos
//! derivados que consume la vista.

pub mod company_dto;
pub mod invoice_dto;
pub mod job_dto;
pub mod motor_dto;
pub mod user_dto;
pub mod warranty_dto;
