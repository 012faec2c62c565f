use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use crate::pets::service::PetService;
use crate::pets::types::{CreatePetRequest, Pet, UpdatePetRequest};
use crate::pets::validation;

/// Process-level info shared with the health endpoint.
pub struct AppInfo {
    pub started_at: Instant,
}

/// Raw query-string filters; validated before they reach the store.
#[derive(Debug, Default, Deserialize)]
pub struct ListPetsQuery {
    pub kind: Option<String>,
    pub age: Option<String>,
}

/// Rejects malformed ids at the entry edge, before the service is
/// consulted.
fn ensure_valid_id(id: &str) -> Result<(), ApiError> {
    if validation::is_valid_identifier(id) {
        Ok(())
    } else {
        Err(ApiError::invalid_id())
    }
}

fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection);
            Err(ApiError::invalid_json())
        }
    }
}

pub async fn create_pet(
    Extension(service): Extension<Arc<PetService>>,
    payload: Result<Json<CreatePetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let input = require_body(payload)?;
    let pet = service.create(&input)?;
    Ok((StatusCode::CREATED, Json(pet)))
}

pub async fn list_pets(
    Extension(service): Extension<Arc<PetService>>,
    Query(query): Query<ListPetsQuery>,
) -> Result<Json<Vec<Pet>>, ApiError> {
    let filters = validation::validate_filters(query.kind.as_deref(), query.age.as_deref())?;
    Ok(Json(service.list(&filters)))
}

pub async fn get_pet(
    Extension(service): Extension<Arc<PetService>>,
    Path(id): Path<String>,
) -> Result<Json<Pet>, ApiError> {
    ensure_valid_id(&id)?;
    let pet = service.get_by_id(&id)?;
    Ok(Json(pet))
}

pub async fn update_pet(
    Extension(service): Extension<Arc<PetService>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePetRequest>, JsonRejection>,
) -> Result<Json<Pet>, ApiError> {
    ensure_valid_id(&id)?;
    let input = require_body(payload)?;
    let pet = service.update(&id, &input)?;
    Ok(Json(pet))
}

pub async fn delete_pet(
    Extension(service): Extension<Arc<PetService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ensure_valid_id(&id)?;
    service.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Root endpoint: service metadata and a route map for newcomers.
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "mensagem": "Bem-vindo à QA Pet API! 🐾",
        "versao": env!("CARGO_PKG_VERSION"),
        "descricao": "API REST para treinamento e prática de testes de QA",
        "documentacao": "/api-docs",
        "rotas": {
            "pets": "/pets",
            "documentacao": "/api-docs"
        }
    }))
}

pub async fn health(Extension(info): Extension<Arc<AppInfo>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": info.started_at.elapsed().as_secs_f64()
    }))
}

/// Logs method, path, response status and elapsed time for every request.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        "{} {} - status {} - {}ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    response
}
