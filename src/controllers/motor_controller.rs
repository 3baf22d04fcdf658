use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::motor_dto::{CreateMotorRequest, MotorResponse, UpdateMotorRequest};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::motor_repository::MotorRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct MotorController {
    repository: MotorRepository,
    companies: CompanyRepository,
}

impl MotorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MotorRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateMotorRequest) -> Result<MotorResponse, AppError> {
        request.validate()?;

        // El motor pertenece a exactamente una empresa; verificar que exista
        if self.companies.find_by_id(request.company_id).await?.is_none() {
            return Err(not_found_error("Company", &request.company_id.to_string()));
        }

        if self
            .repository
            .tag_exists(&request.motor_tag, request.company_id)
            .await?
        {
            return Err(conflict_error("Motor", "motor_tag", &request.motor_tag));
        }

        let motor = self
            .repository
            .create(
                request.company_id,
                request.motor_tag,
                request.manufacturer,
                request.model,
                request.serial_number,
                request.motor_type,
            )
            .await?;

        Ok(motor.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<MotorResponse, AppError> {
        let motor = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Motor", &id.to_string()))?;

        Ok(motor.into())
    }

    pub async fn list(&self) -> Result<Vec<MotorResponse>, AppError> {
        let motors = self.repository.list_all().await?;
        Ok(motors.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<MotorResponse>, AppError> {
        let motors = self.repository.list_by_company(company_id).await?;
        Ok(motors.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_type(&self, motor_type: &str) -> Result<Vec<MotorResponse>, AppError> {
        let motors = self.repository.list_by_type(motor_type).await?;
        Ok(motors.into_iter().map(Into::into).collect())
    }

    pub async fn search(&self, term: &str) -> Result<Vec<MotorResponse>, AppError> {
        let motors = self.repository.search(term).await?;
        Ok(motors.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMotorRequest,
    ) -> Result<MotorResponse, AppError> {
        request.validate()?;

        let motor = self
            .repository
            .update(
                id,
                request.motor_tag,
                request.manufacturer,
                request.model,
                request.serial_number,
                request.motor_type,
            )
            .await?
            .ok_or_else(|| not_found_error("Motor", &id.to_string()))?;

        Ok(motor.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Motor", &id.to_string()));
        }
        Ok(())
    }
}
