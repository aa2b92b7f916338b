//! Payload shapes served by the people API.
//!
//! Only the fields the reducers read are required; everything else the
//! endpoint sends is ignored.

use serde::{Deserialize, Serialize};

pub type PersonId = u64;

/// One entry of `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
}

/// Body of `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PersonDetail {
    pub id: PersonId,
    pub name: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "catchPhrase")]
    pub catch_phrase: String,
    /// Shown as the bio.
    pub bs: String,
}
