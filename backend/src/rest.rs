use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use shared::{CreateBillRequest, LogRecord, UpdateBillRequest};
use tracing::info;

use crate::domain::{BillService, BillServiceError};

/// Application state containing the BillService
#[derive(Clone)]
pub struct AppState {
    pub bill_service: BillService,
}

impl AppState {
    pub fn new(bill_service: BillService) -> Self {
        Self { bill_service }
    }
}

/// Assemble the API router served under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/bills", get(list_bills).post(create_bill))
        .route("/bills/:id", put(update_bill))
        .route("/logs", post(ingest_log))
        .with_state(state)
}

/// Axum handler for GET /api/bills
pub async fn list_bills(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/bills");

    match state.bill_service.list_bills().await {
        Ok(bills) => (StatusCode::OK, Json(bills)).into_response(),
        Err(e) => {
            tracing::error!("Error listing bills: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing bills").into_response()
        }
    }
}

/// Axum handler for POST /api/bills
pub async fn create_bill(
    State(state): State<AppState>,
    Json(request): Json<CreateBillRequest>,
) -> impl IntoResponse {
    info!("POST /api/bills - file: {}", request.file_name);

    match state.bill_service.create_bill(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Error creating bill: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating bill").into_response()
        }
    }
}

/// Axum handler for PUT /api/bills/:id
pub async fn update_bill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBillRequest>,
) -> impl IntoResponse {
    info!("PUT /api/bills/{}", id);

    match state.bill_service.update_bill(&id, request).await {
        Ok(bill) => (StatusCode::OK, Json(bill)).into_response(),
        Err(BillServiceError::NotFound(id)) => {
            (StatusCode::NOT_FOUND, format!("Bill {} not found", id)).into_response()
        }
        Err(e) => {
            tracing::error!("Error updating bill: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error updating bill").into_response()
        }
    }
}

/// Axum handler for POST /api/logs: forwards browser-side log lines into
/// the server log stream.
pub async fn ingest_log(Json(record): Json<LogRecord>) -> impl IntoResponse {
    let component = record.component.as_deref().unwrap_or("frontend");
    match record.level.as_str() {
        "error" => tracing::error!(component, "{}", record.message),
        "warn" => tracing::warn!(component, "{}", record.message),
        "debug" => tracing::debug!(component, "{}", record.message),
        _ => tracing::info!(component, "{}", record.message),
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbConnection;
    use axum::body::Body;
    use axum::http::Request;
    use shared::{Bill, BillStatus, CreateBillResponse};
    use tower::util::ServiceExt;

    /// Helper to create test handlers
    async fn setup_test_state() -> AppState {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        AppState::new(BillService::new(db))
    }

    fn create_request() -> CreateBillRequest {
        CreateBillRequest {
            email: "a@a".to_string(),
            file_name: "billet.jpg".to_string(),
        }
    }

    fn update_request() -> UpdateBillRequest {
        UpdateBillRequest {
            email: "a@a".to_string(),
            expense_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: 348.0,
            date: "2023-10-23".to_string(),
            status: BillStatus::Pending,
            commentary: String::new(),
            vat: "70".to_string(),
            pct: 20,
        }
    }

    #[tokio::test]
    async fn test_create_bill_handler_returns_created() {
        let state = setup_test_state().await;

        let response = create_bill(State(state), Json(create_request()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_update_unknown_bill_returns_not_found() {
        let state = setup_test_state().await;

        let response = update_bill(
            State(state),
            Path("missing".to_string()),
            Json(update_request()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ingest_log_accepts_browser_records() {
        let record = LogRecord {
            level: "info".to_string(),
            message: "page chargée".to_string(),
            component: Some("BillsPage".to_string()),
        };

        let response = ingest_log(Json(record)).await.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_bill_lifecycle_through_the_router() {
        let state = setup_test_state().await;
        let app = router(state);

        // Create the draft
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/bills")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&create_request()).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let created: CreateBillResponse = serde_json::from_slice(&body).unwrap();

        // Complete it
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/bills/{}", created.key))
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&update_request()).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // It shows up in the list with the submitted fields
        let response = app
            .oneshot(Request::builder().uri("/bills").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let bills: Vec<Bill> = serde_json::from_slice(&body).unwrap();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].name, "Vol Paris Londres");
        assert_eq!(bills[0].file_url, created.file_url);
    }
}
