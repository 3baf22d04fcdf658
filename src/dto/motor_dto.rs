use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::motor::{Motor, MotorWithCompany};

// Request para registrar un motor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMotorRequest {
    pub company_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub motor_tag: String,

    #[validate(length(max = 255))]
    pub manufacturer: Option<String>,

    #[validate(length(max = 255))]
    pub model: Option<String>,

    #[validate(length(max = 255))]
    pub serial_number: Option<String>,

    #[validate(length(max = 100))]
    pub motor_type: Option<String>,
}

// Request para actualizar un motor existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMotorRequest {
    #[validate(length(min = 1, max = 100))]
    pub motor_tag: Option<String>,

    #[validate(length(max = 255))]
    pub manufacturer: Option<String>,

    #[validate(length(max = 255))]
    pub model: Option<String>,

    #[validate(length(max = 255))]
    pub serial_number: Option<String>,

    #[validate(length(max = 100))]
    pub motor_type: Option<String>,
}

// Response de motor para la API
#[derive(Debug, Serialize)]
pub struct MotorResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub motor_tag: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub motor_type: Option<String>,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Motor> for MotorResponse {
    fn from(motor: Motor) -> Self {
        Self {
            id: motor.id,
            company_id: motor.company_id,
            motor_tag: motor.motor_tag,
            manufacturer: motor.manufacturer,
            model: motor.model,
            serial_number: motor.serial_number,
            motor_type: motor.motor_type,
            company_name: None,
            created_at: motor.created_at,
            updated_at: motor.updated_at,
        }
    }
}

impl From<MotorWithCompany> for MotorResponse {
    fn from(row: MotorWithCompany) -> Self {
        let mut response = MotorResponse::from(row.motor);
        response.company_name = row.company_name;
        response
    }
}
