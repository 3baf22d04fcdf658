use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::job_controller::JobController;
use crate::dto::company_dto::{ApiResponse, SearchQuery};
use crate::dto::job_dto::{CreateJobRequest, JobResponse, UpdateJobRequest};
use crate::models::job::JobStatus;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_job_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_job))
        .route("/", get(list_jobs))
        .route("/search", get(search_jobs))
        .route("/company/:company_id", get(list_jobs_by_company))
        .route("/status/:status", get(list_jobs_by_status))
        .route("/:id", get(get_job))
        .route("/:id", put(update_job))
        .route("/:id", delete(delete_job))
}

async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<ApiResponse<JobResponse>>, AppError> {
    let controller = JobController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Trabajo creado exitosamente".to_string(),
    )))
}

async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobResponse>>, AppError> {
    let controller = JobController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn search_jobs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<JobResponse>>, AppError> {
    let controller = JobController::new(state.pool.clone());
    Ok(Json(controller.search(&query.q).await?))
}

async fn list_jobs_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<JobResponse>>, AppError> {
    let controller = JobController::new(state.pool.clone());
    Ok(Json(controller.list_by_company(company_id).await?))
}

async fn list_jobs_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<JobResponse>>, AppError> {
    let status: JobStatus = status.parse().map_err(AppError::BadRequest)?;
    let controller = JobController::new(state.pool.clone());
    Ok(Json(controller.list_by_status(status).await?))
}

async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobResponse>, AppError> {
    let controller = JobController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateJobRequest>,
) -> Result<Json<ApiResponse<JobResponse>>, AppError> {
    let controller = JobController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = JobController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Trabajo eliminado exitosamente"
    })))
}
