use chrono::{Duration, Local};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::warranty_dto::{
    CreateWarrantyRequest, ExtendWarrantyRequest, UpdateWarrantyRequest, WarrantyResponse,
};
use crate::models::warranty::{NewWarranty, WarrantyStatus};
use crate::repositories::warranty_repository::WarrantyRepository;
use crate::services::status::WARRANTY_EXPIRING_WINDOW_DAYS;
use crate::services::warranty_extension;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::validate_date;

pub struct WarrantyController {
    repository: WarrantyRepository,
}

impl WarrantyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: WarrantyRepository::new(pool),
        }
    }

    /// Crear una garantía: el fin de cobertura se deriva del inicio más el
    /// período contractual, nunca lo envía el cliente.
    pub async fn create(&self, request: CreateWarrantyRequest) -> Result<WarrantyResponse, AppError> {
        request.validate()?;

        let warranty_start = validate_date(&request.warranty_start)
            .map_err(|_| validation_error("warranty_start", "fecha inválida, se espera YYYY-MM-DD"))?;

        let warranty_end = warranty_extension::coverage_end(warranty_start, request.warranty_period)
            .ok_or_else(|| {
                validation_error("warranty_period", "período de garantía fuera de rango")
            })?;

        let warranty = self
            .repository
            .create(NewWarranty {
                job_id: request.job_id,
                motor_id: request.motor_id,
                company_id: request.company_id,
                warranty_start,
                warranty_end,
                warranty_period: request.warranty_period,
                work_description: request.work_description,
                notes: request.notes,
            })
            .await?;

        Ok(WarrantyResponse::from_warranty(warranty, Local::now().date_naive()))
    }

    /// Extender una garantía existente. El cálculo de fechas y la regla
    /// set-once de original_end_date viven en services::warranty_extension;
    /// aquí solo se orquesta y persiste.
    pub async fn extend(
        &self,
        id: Uuid,
        request: ExtendWarrantyRequest,
    ) -> Result<WarrantyResponse, AppError> {
        request.validate()?;

        let warranty = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Warranty", &id.to_string()))?;

        let outcome = warranty_extension::extend(
            warranty.warranty_end,
            warranty.original_end_date,
            warranty.extension_months,
            request.extension_months,
        )
        .ok_or_else(|| {
            validation_error("extension_months", "la extensión debe ser un número positivo de meses")
        })?;

        let updated = self
            .repository
            .apply_extension(
                id,
                outcome.new_end,
                outcome.original_end_date,
                outcome.extension_months,
                request.extension_reason,
                request.notes,
            )
            .await?
            .ok_or_else(|| not_found_error("Warranty", &id.to_string()))?;

        Ok(WarrantyResponse::from_warranty(updated, Local::now().date_naive()))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<WarrantyResponse, AppError> {
        let warranty = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Warranty", &id.to_string()))?;

        Ok(WarrantyResponse::from_warranty(warranty, Local::now().date_naive()))
    }

    pub async fn list(&self) -> Result<Vec<WarrantyResponse>, AppError> {
        let today = Local::now().date_naive();
        let warranties = self.repository.list_all().await?;
        Ok(warranties
            .into_iter()
            .map(|w| WarrantyResponse::from_details(w, today))
            .collect())
    }

    pub async fn list_by_status(
        &self,
        status: WarrantyStatus,
    ) -> Result<Vec<WarrantyResponse>, AppError> {
        let today = Local::now().date_naive();
        let warranties = self.repository.list_by_status(status).await?;
        Ok(warranties
            .into_iter()
            .map(|w| WarrantyResponse::from_details(w, today))
            .collect())
    }

    /// Garantías activas que expiran dentro de la ventana de 30 días
    pub async fn list_expiring(&self) -> Result<Vec<WarrantyResponse>, AppError> {
        let today = Local::now().date_naive();
        let until = today + Duration::days(WARRANTY_EXPIRING_WINDOW_DAYS);
        let warranties = self.repository.list_expiring(until).await?;
        Ok(warranties
            .into_iter()
            .map(|w| WarrantyResponse::from_details(w, today))
            .collect())
    }

    pub async fn search(&self, term: &str) -> Result<Vec<WarrantyResponse>, AppError> {
        let today = Local::now().date_naive();
        let warranties = self.repository.search(term).await?;
        Ok(warranties
            .into_iter()
            .map(|w| WarrantyResponse::from_details(w, today))
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateWarrantyRequest,
    ) -> Result<WarrantyResponse, AppError> {
        request.validate()?;

        let warranty = self
            .repository
            .update(id, request.status, request.work_description, request.notes)
            .await?
            .ok_or_else(|| not_found_error("Warranty", &id.to_string()))?;

        Ok(WarrantyResponse::from_warranty(warranty, Local::now().date_naive()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Warranty", &id.to_string()));
        }
        Ok(())
    }
}
