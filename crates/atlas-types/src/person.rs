//! Person records

use serde::{Deserialize, Serialize};

/// A stored person record.
///
/// `id` is assigned by the storage engine on insert and never reused.
/// Every other attribute is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub alias: Option<String>,
    pub phone: Option<String>,
    pub group: Option<String>,
}

impl Person {
    /// Build a stored record from its insert payload.
    pub fn from_new(id: i64, new: NewPerson) -> Self {
        Self {
            id,
            name: new.name,
            surname: new.surname,
            alias: new.alias,
            phone: new.phone,
            group: new.group,
        }
    }

    /// The four attributes covered by search, in column order.
    pub fn searchable_fields(&self) -> [Option<&str>; 4] {
        [
            self.name.as_deref(),
            self.surname.as_deref(),
            self.alias.as_deref(),
            self.phone.as_deref(),
        ]
    }
}

/// Insert payload for a person. Absent and `null` fields are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
}

impl NewPerson {
    pub fn with_alias(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Default::default()
        }
    }
}
