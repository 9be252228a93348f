use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Healthcare provider held by the in-memory store. Identity is the caller-supplied `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

impl Provider {
    pub fn new(id: i64, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}

// ── Request payload ──────────────────────────────────────────────────────────

/// Body of `POST /providers`. Only `id` is checked for presence; a missing
/// or `null` name or specialty becomes an empty string.
#[derive(Debug, Deserialize)]
pub struct CreateProvider {
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    /// Older clients spell it `speciality`.
    #[serde(default, alias = "speciality")]
    pub specialty: Option<String>,
}

impl TryFrom<CreateProvider> for Provider {
    type Error = AppError;

    fn try_from(payload: CreateProvider) -> Result<Self, Self::Error> {
        let id = payload
            .id
            .ok_or_else(|| AppError::BadRequest("'id' is required".to_string()))?;

        Ok(Provider {
            id,
            name: payload.name.unwrap_or_default(),
            specialty: payload.specialty.unwrap_or_default(),
        })
    }
}
