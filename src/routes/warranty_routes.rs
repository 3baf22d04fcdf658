use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::warranty_controller::WarrantyController;
use crate::dto::company_dto::{ApiResponse, SearchQuery};
use crate::dto::warranty_dto::{
    CreateWarrantyRequest, ExtendWarrantyRequest, UpdateWarrantyRequest, WarrantyResponse,
};
use crate::models::warranty::WarrantyStatus;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_warranty_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_warranty))
        .route("/", get(list_warranties))
        .route("/search", get(search_warranties))
        .route("/expiring", get(list_expiring_warranties))
        .route("/status/:status", get(list_warranties_by_status))
        .route("/:id", get(get_warranty))
        .route("/:id", put(update_warranty))
        .route("/:id", delete(delete_warranty))
        .route("/:id/extend", post(extend_warranty))
}

async fn create_warranty(
    State(state): State<AppState>,
    Json(request): Json<CreateWarrantyRequest>,
) -> Result<Json<ApiResponse<WarrantyResponse>>, AppError> {
    let controller = WarrantyController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Garantía creada exitosamente".to_string(),
    )))
}

async fn extend_warranty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExtendWarrantyRequest>,
) -> Result<Json<ApiResponse<WarrantyResponse>>, AppError> {
    let controller = WarrantyController::new(state.pool.clone());
    let response = controller.extend(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Garantía extendida exitosamente".to_string(),
    )))
}

async fn list_warranties(
    State(state): State<AppState>,
) -> Result<Json<Vec<WarrantyResponse>>, AppError> {
    let controller = WarrantyController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn search_warranties(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<WarrantyResponse>>, AppError> {
    let controller = WarrantyController::new(state.pool.clone());
    Ok(Json(controller.search(&query.q).await?))
}

async fn list_expiring_warranties(
    State(state): State<AppState>,
) -> Result<Json<Vec<WarrantyResponse>>, AppError> {
    let controller = WarrantyController::new(state.pool.clone());
    Ok(Json(controller.list_expiring().await?))
}

async fn list_warranties_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<WarrantyResponse>>, AppError> {
    let status: WarrantyStatus = status.parse().map_err(AppError::BadRequest)?;
    let controller = WarrantyController::new(state.pool.clone());
    Ok(Json(controller.list_by_status(status).await?))
}

async fn get_warranty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WarrantyResponse>, AppError> {
    let controller = WarrantyController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_warranty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWarrantyRequest>,
) -> Result<Json<ApiResponse<WarrantyResponse>>, AppError> {
    let controller = WarrantyController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_warranty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = WarrantyController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Garantía eliminada exitosamente"
    })))
}
