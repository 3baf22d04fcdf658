use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{
    ApiResponse, CompanyResponse, CreateCompanyRequest, SearchQuery, UpdateCompanyRequest,
};
use crate::models::company::CompanyStatus;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_company))
        .route("/", get(list_companies))
        .route("/search", get(search_companies))
        .route("/status/:status", get(list_companies_by_status))
        .route("/:id", get(get_company))
        .route("/:id", put(update_company))
        .route("/:id", delete(delete_company))
}

async fn create_company(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Empresa creada exitosamente".to_string(),
    )))
}

async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn search_companies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    Ok(Json(controller.search(&query.q).await?))
}

async fn list_companies_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let status: CompanyStatus = status.parse().map_err(AppError::BadRequest)?;
    let controller = CompanyController::new(state.pool.clone());
    Ok(Json(controller.list_by_status(status).await?))
}

async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Empresa eliminada exitosamente"
    })))
}
