//! Central error-to-response translation.
//!
//! Every 4xx/5xx leaving the API carries the same JSON envelope:
//! `{"erro": <code>, "mensagem": <text>, "detalhes"?: <extra>}`. Domain
//! errors are converted here; unexpected panics are funneled through
//! [`handle_panic`] and reported as a generic 500 with no internal detail
//! leaked to the caller.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::pets::service::PetError;
use crate::pets::validation::ValidationError;

/// Stable error codes of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    NotFound,
    InvalidId,
    InvalidJson,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Validation => "ERRO_VALIDACAO",
            ErrorCode::NotFound => "RECURSO_NAO_ENCONTRADO",
            ErrorCode::InvalidId => "ID_INVALIDO",
            ErrorCode::InvalidJson => "JSON_INVALIDO",
            ErrorCode::Internal => "ERRO_INTERNO",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::Validation | ErrorCode::InvalidId | ErrorCode::InvalidJson => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    erro: &'static str,
    mensagem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detalhes: Option<Value>,
}

/// An error ready to leave the API.
#[derive(Debug)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn invalid_id() -> Self {
        Self {
            code: ErrorCode::InvalidId,
            message: "O ID fornecido não é um UUID válido".to_string(),
            details: None,
        }
    }

    pub fn invalid_json() -> Self {
        Self {
            code: ErrorCode::InvalidJson,
            message: "O corpo da requisição contém JSON inválido".to_string(),
            details: None,
        }
    }

    pub fn internal() -> Self {
        Self {
            code: ErrorCode::Internal,
            message: "Ocorreu um erro interno no servidor".to_string(),
            details: None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            code: ErrorCode::Validation,
            message: err.message,
            details: err.details,
        }
    }
}

impl From<PetError> for ApiError {
    fn from(err: PetError) -> Self {
        match err {
            PetError::Validation(inner) => inner.into(),
            PetError::NotFound { .. } => Self {
                code: ErrorCode::NotFound,
                message: err.to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        let body = ErrorBody {
            erro: self.code.as_str(),
            mensagem: self.message,
            detalhes: self.details,
        };
        (status, Json(body)).into_response()
    }
}

/// Custom responder for the panic-catching layer: log the fault locally,
/// answer with the generic 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Unhandled panic while serving request: {}", detail);

    ApiError::internal().into_response()
}
