//! The generated message record.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// One generated message, serialized as a flat JSON object.
///
/// Field names on disk are `tipo`, `profesor`, `curso` and `mensaje`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "tipo")]
    pub category: Category,
    #[serde(rename = "profesor")]
    pub professor: String,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "mensaje")]
    pub message: String,
}
