//! Field-level validation for the pet endpoints.
//!
//! Pure functions: they inspect the raw payloads and either hand back a
//! typed value or fail with a [`ValidationError`] carrying the message
//! surfaced to the client (and, for enumeration failures, a structured
//! detail listing the accepted values). Checks run in a fixed order and
//! stop at the first violation.

use serde_json::{json, Value};
use thiserror::Error;
use uuid::{Uuid, Variant};

use super::types::{CreatePetRequest, NewPet, PetFilters, PetKind, PetPatch, UpdatePetRequest};

const MAX_TEXT_LEN: usize = 100;
const MAX_AGE: f64 = 150.0;

/// A rejected payload. `details` carries optional structured context, e.g.
/// the list of valid enumeration values for a bad `kind`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub details: Option<Value>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: Value) -> Self {
        Self {
            message: message.into(),
            details: Some(details),
        }
    }
}

/// `subject` is the already-qualified noun, e.g. `"O campo 'kind'"` or
/// `"O filtro 'kind'"`.
fn invalid_kind_error(subject: &str) -> ValidationError {
    let valid: Vec<&str> = PetKind::ALL.iter().map(|k| k.as_str()).collect();
    ValidationError::with_details(
        format!(
            "{} deve ser um dos seguintes valores: {}",
            subject,
            valid.join(", ")
        ),
        json!({ "valoresValidos": valid }),
    )
}

/// Checks a required text value: a string, non-blank, within the length
/// cap.
fn text_value(field: &str, value: &Value) -> Result<String, ValidationError> {
    let text = value.as_str().ok_or_else(|| {
        ValidationError::new(format!("O campo '{}' deve ser uma string", field))
    })?;
    if text.trim().is_empty() {
        return Err(ValidationError::new(format!(
            "O campo '{}' não pode ser vazio",
            field
        )));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::new(format!(
            "O campo '{}' deve ter no máximo {} caracteres",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(text.to_string())
}

/// Checks an optional text value: must be a string within the length cap.
/// Emptiness is allowed.
fn optional_text(field: &str, value: Option<&Value>) -> Result<Option<String>, ValidationError> {
    let value = match value {
        Some(v) => v,
        None => return Ok(None),
    };
    let text = value.as_str().ok_or_else(|| {
        ValidationError::new(format!("O campo '{}' deve ser uma string", field))
    })?;
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::new(format!(
            "O campo '{}' deve ter no máximo {} caracteres",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(Some(text.to_string()))
}

fn kind_value(value: &Value) -> Result<PetKind, ValidationError> {
    value
        .as_str()
        .and_then(PetKind::parse)
        .ok_or_else(|| invalid_kind_error("O campo 'kind'"))
}

/// Checks an age value: numeric, non-negative, realistic, integral.
fn age_value(value: &Value) -> Result<u32, ValidationError> {
    let age = value
        .as_f64()
        .ok_or_else(|| ValidationError::new("O campo 'age' deve ser um número"))?;
    if age < 0.0 {
        return Err(ValidationError::new("O campo 'age' não pode ser negativo"));
    }
    if age > MAX_AGE {
        return Err(ValidationError::new(
            "O campo 'age' deve ser um valor realista (máximo 150 anos)",
        ));
    }
    if age.fract() != 0.0 {
        return Err(ValidationError::new(
            "O campo 'age' deve ser um número inteiro",
        ));
    }
    Ok(age as u32)
}

/// Validates a creation payload. Field order: name, kind, age, breed,
/// ownerName.
pub fn validate_create(input: &CreatePetRequest) -> Result<NewPet, ValidationError> {
    let name = match input.name.as_ref() {
        Some(value) => text_value("name", value)?,
        None => return Err(ValidationError::new("O campo 'name' é obrigatório")),
    };

    let kind = match input.kind.as_ref() {
        Some(value) => kind_value(value)?,
        None => return Err(ValidationError::new("O campo 'kind' é obrigatório")),
    };

    let age = match input.age.as_ref() {
        Some(value) => age_value(value)?,
        None => return Err(ValidationError::new("O campo 'age' é obrigatório")),
    };

    let breed = optional_text("breed", input.breed.as_ref())?;
    let owner_name = optional_text("ownerName", input.owner_name.as_ref())?;

    Ok(NewPet {
        name,
        kind,
        age,
        breed,
        owner_name,
    })
}

/// Validates a partial-update payload. At least one field must be present;
/// present fields follow the creation rules, absent fields are never an
/// error.
pub fn validate_update(input: &UpdatePetRequest) -> Result<PetPatch, ValidationError> {
    if input.name.is_none()
        && input.kind.is_none()
        && input.age.is_none()
        && input.breed.is_none()
        && input.owner_name.is_none()
    {
        return Err(ValidationError::new(
            "É necessário fornecer pelo menos um campo para atualização",
        ));
    }

    let name = input
        .name
        .as_ref()
        .map(|value| text_value("name", value))
        .transpose()?;
    let kind = input.kind.as_ref().map(kind_value).transpose()?;
    let age = input.age.as_ref().map(age_value).transpose()?;
    let breed = optional_text("breed", input.breed.as_ref())?;
    let owner_name = optional_text("ownerName", input.owner_name.as_ref())?;

    Ok(PetPatch {
        name,
        kind,
        age,
        breed,
        owner_name,
    })
}

/// Validates the listing filters taken from the query string.
pub fn validate_filters(
    kind: Option<&str>,
    age: Option<&str>,
) -> Result<PetFilters, ValidationError> {
    let kind = match kind {
        Some(raw) => {
            Some(PetKind::parse(raw).ok_or_else(|| invalid_kind_error("O filtro 'kind'"))?)
        }
        None => None,
    };

    let age = match age {
        Some(raw) => {
            let parsed: f64 = raw.parse().map_err(|_| {
                ValidationError::new("O filtro 'age' deve ser um número válido")
            })?;
            if !parsed.is_finite() {
                return Err(ValidationError::new(
                    "O filtro 'age' deve ser um número válido",
                ));
            }
            if parsed < 0.0 {
                return Err(ValidationError::new("O filtro 'age' não pode ser negativo"));
            }
            Some(parsed)
        }
        None => None,
    };

    Ok(PetFilters { kind, age })
}

/// Returns true iff `id` is canonical UUID-v4 text: 8-4-4-4-12 hex groups,
/// version nibble 4, RFC 4122 variant, case-insensitive. Pure predicate.
pub fn is_valid_identifier(id: &str) -> bool {
    // Uuid::try_parse also accepts braced/simple/URN forms; the length check
    // pins the hyphenated canonical form.
    if id.len() != 36 {
        return false;
    }
    match Uuid::try_parse(id) {
        Ok(uuid) => uuid.get_version_num() == 4 && uuid.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}
