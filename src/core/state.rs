//! # Application State
//!
//! The people demo's whole state in one immutable snapshot.
//!
//! ```text
//! App
//! ├── names: Vec<String>        // display names, first LIST_LIMIT only
//! ├── ids: Vec<PersonId>        // index-aligned with names
//! ├── highlight: Vec<bool>      // index-aligned with names (checkboxes)
//! ├── selected: Option<usize>   // row whose bio is shown
//! ├── bio: String               // filled by the detail fetch
//! ├── error: Option<String>     // last failed fetch, distinct from bio
//! └── base_url: String          // API root for fetch URLs
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! which builds a new `App` and leaves the old one untouched.

use crate::core::person::PersonId;

/// How many people the list keeps from the fetch result.
pub const LIST_LIMIT: usize = 5;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub names: Vec<String>,
    pub ids: Vec<PersonId>,
    pub highlight: Vec<bool>,
    pub selected: Option<usize>,
    pub bio: String,
    pub error: Option<String>,
    pub base_url: String,
}

impl App {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            names: Vec::new(),
            ids: Vec::new(),
            highlight: Vec::new(),
            selected: None,
            bio: String::new(),
            error: None,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `GET {base}/users`
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// `GET {base}/users/{id}`
    pub fn user_url(&self, id: PersonId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// The three index-aligned sequences agree in length.
    pub fn is_aligned(&self) -> bool {
        self.names.len() == self.ids.len() && self.ids.len() == self.highlight.len()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
