//! Modelo de Motor
//!
//! Motor en servicio, pertenece a exactamente una empresa. El campo
//! `motor_tag` es el identificador legible que usa el taller (distinto del
//! UUID interno).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Motor - mapea exactamente a la tabla motors
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Motor {
    pub id: Uuid,
    pub company_id: Uuid,
    pub motor_tag: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub motor_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Motor con el nombre de su empresa para listados
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MotorWithCompany {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub motor: Motor,
    pub company_name: Option<String>,
}
