use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::{CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest};
use crate::models::company::CompanyStatus;
use crate::repositories::company_repository::CompanyRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct CompanyController {
    repository: CompanyRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCompanyRequest) -> Result<CompanyResponse, AppError> {
        request.validate()?;

        if let Some(email) = &request.email {
            if self.repository.email_exists(email).await? {
                return Err(conflict_error("Company", "email", email));
            }
        }

        let company = self
            .repository
            .create(
                request.name,
                request.contact_name,
                request.email,
                request.phone,
                request.address,
                request.status.unwrap_or(CompanyStatus::Active),
            )
            .await?;

        Ok(company.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CompanyResponse, AppError> {
        let company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Company", &id.to_string()))?;

        Ok(company.into())
    }

    pub async fn list(&self) -> Result<Vec<CompanyResponse>, AppError> {
        let companies = self.repository.list_all().await?;
        Ok(companies.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_status(
        &self,
        status: CompanyStatus,
    ) -> Result<Vec<CompanyResponse>, AppError> {
        let companies = self.repository.list_by_status(status).await?;
        Ok(companies.into_iter().map(Into::into).collect())
    }

    pub async fn search(&self, term: &str) -> Result<Vec<CompanyResponse>, AppError> {
        let companies = self.repository.search(term).await?;
        Ok(companies.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCompanyRequest,
    ) -> Result<CompanyResponse, AppError> {
        request.validate()?;

        let company = self
            .repository
            .update(
                id,
                request.name,
                request.contact_name,
                request.email,
                request.phone,
                request.address,
                request.status,
            )
            .await?
            .ok_or_else(|| not_found_error("Company", &id.to_string()))?;

        Ok(company.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Company", &id.to_string()));
        }
        Ok(())
    }
}
