//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Mutex;

use crate::api::{FetchError, JsonFetcher};
use crate::core::person::{Company, PersonDetail, PersonSummary};
use crate::core::state::App;

pub const TEST_BASE_URL: &str = "http://api.test";

/// `n` people with ids `1..=n`.
pub fn people(n: usize) -> Vec<PersonSummary> {
    (1..=n as u64)
        .map(|id| PersonSummary {
            id,
            name: format!("Person {id}"),
        })
        .collect()
}

pub fn detail(id: u64, bs: &str) -> PersonDetail {
    PersonDetail {
        id,
        name: format!("Person {id}"),
        company: Company {
            name: "Acme".to_string(),
            catch_phrase: String::new(),
            bs: bs.to_string(),
        },
    }
}

/// An app whose list has already arrived: `n` people, nothing selected.
pub fn loaded_app(n: usize) -> App {
    let people = people(n);
    App {
        names: people.iter().map(|p| p.name.clone()).collect(),
        ids: people.iter().map(|p| p.id).collect(),
        highlight: vec![false; n],
        ..App::new(TEST_BASE_URL)
    }
}

/// A fetcher that answers every GET with the same canned result.
pub struct StubFetcher {
    result: Result<serde_json::Value, FetchError>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn ok(value: serde_json::Value) -> Self {
        Self {
            result: Ok(value),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: FetchError) -> Self {
        Self {
            result: Err(error),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonFetcher for StubFetcher {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.result.clone()
    }
}
