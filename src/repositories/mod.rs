//! Capa de acceso a datos
//!
//! Un repositorio por tabla sobre el pool de PostgreSQL. Las consultas con
//! relaciones usan LEFT JOIN para que una entidad relacionada ausente
//! llegue como NULL y no como error.

pub mod company_repository;
pub mod invoice_repository;
pub mod job_repository;
pub mod motor_repository;
pub mod user_repository;
pub mod warranty_repository;
