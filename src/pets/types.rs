use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed set of pet kinds accepted by the API.
///
/// Serialized in lowercase (`"dog"`, `"cat"`, ...). Any other value is
/// rejected by validation with a structured detail listing these members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    Dog,
    Cat,
    Bird,
    Other,
}

impl PetKind {
    /// Every member of the enumeration, in declaration order.
    pub const ALL: [PetKind; 4] = [PetKind::Dog, PetKind::Cat, PetKind::Bird, PetKind::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetKind::Dog => "dog",
            PetKind::Cat => "cat",
            PetKind::Bird => "bird",
            PetKind::Other => "other",
        }
    }

    /// Parses the lowercase wire form. Returns `None` for anything outside
    /// the enumeration.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dog" => Some(PetKind::Dog),
            "cat" => Some(PetKind::Cat),
            "bird" => Some(PetKind::Bird),
            "other" => Some(PetKind::Other),
            _ => None,
        }
    }
}

/// A stored pet record.
///
/// `id`, `created_at` and `updated_at` are generated server-side and never
/// accepted from the client. `created_at <= updated_at` holds at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Unique identifier (UUID v4 text), immutable after creation.
    pub id: String,
    /// Non-empty name, at most 100 characters.
    pub name: String,
    pub kind: PetKind,
    /// Age in years, 0..=150.
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update.
    pub updated_at: DateTime<Utc>,
}

/// Raw creation payload as received on the wire.
///
/// Every field is kept as a loose JSON value so that wrong-typed input
/// (e.g. `"age": "five"`) reaches the validator and produces a precise
/// validation message instead of failing in deserialization. A JSON `null`
/// is treated the same as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub breed: Option<Value>,
    #[serde(default)]
    pub owner_name: Option<Value>,
}

/// Raw partial-update payload. Same loose shape as [`CreatePetRequest`];
/// absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub breed: Option<Value>,
    #[serde(default)]
    pub owner_name: Option<Value>,
}

/// A creation payload that passed validation. Text fields are still
/// untrimmed; trimming happens in the service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub kind: PetKind,
    pub age: u32,
    pub breed: Option<String>,
    pub owner_name: Option<String>,
}

/// A partial-update payload that passed validation. `Some` fields overwrite
/// the stored record, `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetPatch {
    pub name: Option<String>,
    pub kind: Option<PetKind>,
    pub age: Option<u32>,
    pub breed: Option<String>,
    pub owner_name: Option<String>,
}

/// Validated listing filters. Both filters, when present, are applied as an
/// AND conjunction with exact matching.
///
/// The age is kept as a float because the query string accepts any
/// non-negative number; a non-integral value is legal and simply matches no
/// stored pet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PetFilters {
    pub kind: Option<PetKind>,
    pub age: Option<f64>,
}

impl PetFilters {
    pub fn matches(&self, pet: &Pet) -> bool {
        if let Some(kind) = self.kind {
            if pet.kind != kind {
                return false;
            }
        }
        if let Some(age) = self.age {
            if f64::from(pet.age) != age {
                return false;
            }
        }
        true
    }
}

/// Diagnostic counters exposed by the service.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ServiceStats {
    pub total: usize,
}
