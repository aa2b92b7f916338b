//! Roster library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which demo the terminal adapter mounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Demo {
    /// Selectable list of people fetched from the API
    #[default]
    People,
    /// Static "Hello World" tree
    Hello,
}

impl Demo {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "people" => Some(Demo::People),
            "hello" => Some(Demo::Hello),
            _ => None,
        }
    }
}
