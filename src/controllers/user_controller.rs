use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        if self.repository.email_exists(&request.email).await? {
            return Err(conflict_error("User", "email", &request.email));
        }

        let user = self
            .repository
            .create(
                request.name,
                request.email,
                request.role,
                request.is_active.unwrap_or(true),
            )
            .await?;

        Ok(user.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("User", &id.to_string()))?;

        Ok(user.into())
    }

    pub async fn list(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.list_all().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn list_technicians(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.list_technicians().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate()?;

        let user = self
            .repository
            .update(id, request.name, request.email, request.role, request.is_active)
            .await?
            .ok_or_else(|| not_found_error("User", &id.to_string()))?;

        Ok(user.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("User", &id.to_string()));
        }
        Ok(())
    }
}
