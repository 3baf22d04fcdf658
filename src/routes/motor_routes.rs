use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::motor_controller::MotorController;
use crate::dto::company_dto::{ApiResponse, SearchQuery};
use crate::dto::motor_dto::{CreateMotorRequest, MotorResponse, UpdateMotorRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_motor_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_motor))
        .route("/", get(list_motors))
        .route("/search", get(search_motors))
        .route("/company/:company_id", get(list_motors_by_company))
        .route("/type/:motor_type", get(list_motors_by_type))
        .route("/:id", get(get_motor))
        .route("/:id", put(update_motor))
        .route("/:id", delete(delete_motor))
}

async fn create_motor(
    State(state): State<AppState>,
    Json(request): Json<CreateMotorRequest>,
) -> Result<Json<ApiResponse<MotorResponse>>, AppError> {
    let controller = MotorController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Motor registrado exitosamente".to_string(),
    )))
}

async fn list_motors(
    State(state): State<AppState>,
) -> Result<Json<Vec<MotorResponse>>, AppError> {
    let controller = MotorController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn search_motors(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<MotorResponse>>, AppError> {
    let controller = MotorController::new(state.pool.clone());
    Ok(Json(controller.search(&query.q).await?))
}

async fn list_motors_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<MotorResponse>>, AppError> {
    let controller = MotorController::new(state.pool.clone());
    Ok(Json(controller.list_by_company(company_id).await?))
}

async fn list_motors_by_type(
    State(state): State<AppState>,
    Path(motor_type): Path<String>,
) -> Result<Json<Vec<MotorResponse>>, AppError> {
    let controller = MotorController::new(state.pool.clone());
    Ok(Json(controller.list_by_type(&motor_type).await?))
}

async fn get_motor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MotorResponse>, AppError> {
    let controller = MotorController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_motor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMotorRequest>,
) -> Result<Json<ApiResponse<MotorResponse>>, AppError> {
    let controller = MotorController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_motor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MotorController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Motor eliminado exitosamente"
    })))
}
