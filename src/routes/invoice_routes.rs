use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::invoice_controller::InvoiceController;
use crate::dto::company_dto::{ApiResponse, SearchQuery};
use crate::dto::invoice_dto::{CreateInvoiceRequest, InvoiceResponse, UpdateInvoiceRequest};
use crate::models::invoice::InvoiceStatus;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_invoice_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_invoice))
        .route("/", get(list_invoices))
        .route("/search", get(search_invoices))
        .route("/status/:status", get(list_invoices_by_status))
        .route("/:id", get(get_invoice))
        .route("/:id", put(update_invoice))
        .route("/:id", delete(delete_invoice))
}

async fn create_invoice(
    State(state): State<AppState>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<Json<ApiResponse<InvoiceResponse>>, AppError> {
    let controller = InvoiceController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Factura creada exitosamente".to_string(),
    )))
}

async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvoiceResponse>>, AppError> {
    let controller = InvoiceController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn search_invoices(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<InvoiceResponse>>, AppError> {
    let controller = InvoiceController::new(state.pool.clone());
    Ok(Json(controller.search(&query.q).await?))
}

async fn list_invoices_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<InvoiceResponse>>, AppError> {
    let status: InvoiceStatus = status.parse().map_err(AppError::BadRequest)?;
    let controller = InvoiceController::new(state.pool.clone());
    Ok(Json(controller.list_by_status(status).await?))
}

async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceResponse>, AppError> {
    let controller = InvoiceController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<Json<ApiResponse<InvoiceResponse>>, AppError> {
    let controller = InvoiceController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = InvoiceController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Factura eliminada exitosamente"
    })))
}
