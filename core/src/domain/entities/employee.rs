//! Employee entity mirrored from the upstream API.

use serde::{Deserialize, Serialize};

/// Column names of the CSV export, in field order
pub const CSV_HEADERS: [&str; 5] = ["id", "name", "email", "gender", "status"];

/// Employee record as exchanged with the upstream API
///
/// The facade does not own this data: apart from `id`, which routes calls
/// to `users/{id}`, every field is passed through untouched. Absent fields
/// stay absent when the record is encoded again, so upstream bodies are
/// echoed back as received (minus fields this type does not know about).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Upstream-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Employee {
    /// Creates an employee with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Values for one CSV row, aligned with [`CSV_HEADERS`]; absent fields
    /// become empty strings
    pub fn csv_record(&self) -> [String; 5] {
        [
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.gender.clone().unwrap_or_default(),
            self.status.clone().unwrap_or_default(),
        ]
    }
}
