//! Routers de la API
//!
//! Un router por entidad, anidados bajo /api/<entidad> en main.

pub mod company_routes;
pub mod invoice_routes;
pub mod job_routes;
pub mod motor_routes;
pub mod user_routes;
pub mod warranty_routes;
