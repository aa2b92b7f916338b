//! # Actions
//!
//! Everything that can happen in Roster becomes an `Action`.
//! User clicks a row? That's `Action::Select(index)`.
//! The people list arrives? That's `Action::GotNames(people)`.
//!
//! `update()` takes the current state and an action and returns a `Next`:
//! the new state, the new state plus an effect to run, or a redirect to
//! another action. No side effects here. I/O happens in the runners.
//!
//! ```text
//! State + Action  →  update()  →  Next::State(state)
//!                                 Next::Effect(state, effect)
//!                                 Next::Dispatch(action)
//! ```
//!
//! Out-of-range indices are treated as no-ops: the same state comes back
//! and nothing is scheduled.

use log::{debug, warn};
use std::fmt;

use crate::core::person::{PersonDetail, PersonSummary};
use crate::core::state::{App, LIST_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip the checkbox of one row.
    ToggleHighlight(usize),
    /// Select a row and fetch its bio.
    Select(usize),
    SelectUp,
    SelectDown,
    GotBio(PersonDetail),
    GotNames(Vec<PersonSummary>),
    /// A fetch effect failed; `action` is the completion that never ran.
    FetchFailed { action: Completion, message: String },
    Quit,
}

/// The reducer a fetch effect feeds its decoded payload to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    GotNames,
    GotBio,
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::GotNames => write!(f, "GotNames"),
            Completion::GotBio => write!(f, "GotBio"),
        }
    }
}

/// Parameters of the `fetchJson` runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJson {
    pub url: String,
    pub action: Completion,
}

/// Work the runtime hands to the outside world after committing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJson(FetchJson),
    Quit,
}

impl Effect {
    pub fn fetch(url: impl Into<String>, action: Completion) -> Self {
        Effect::FetchJson(FetchJson {
            url: url.into(),
            action,
        })
    }
}

/// What a reducer asks the runtime to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    State(App),
    Effect(App, Effect),
    Dispatch(Action),
}

impl Next {
    /// The committed state, if this is not a redirect.
    pub fn state(&self) -> Option<&App> {
        match self {
            Next::State(s) | Next::Effect(s, _) => Some(s),
            Next::Dispatch(_) => None,
        }
    }
}

/// Initial state paired with the fetch of the people list.
pub fn init(base_url: &str) -> (App, Effect) {
    let app = App::new(base_url);
    let effect = Effect::fetch(app.users_url(), Completion::GotNames);
    (app, effect)
}

pub fn update(state: &App, action: Action) -> Next {
    debug!("update: {:?}", action);
    match action {
        Action::ToggleHighlight(index) => Next::State(toggle_highlight(state, index)),
        Action::Select(index) => select(state, index),
        Action::SelectUp => match state.selected {
            Some(i) if i > 0 => Next::Dispatch(Action::Select(i - 1)),
            _ => Next::State(state.clone()),
        },
        Action::SelectDown => match state.selected {
            Some(i) if i + 1 < state.ids.len() => Next::Dispatch(Action::Select(i + 1)),
            _ => Next::State(state.clone()),
        },
        Action::GotBio(person) => Next::State(App {
            bio: person.company.bs,
            error: None,
            ..state.clone()
        }),
        Action::GotNames(people) => Next::State(got_names(state, &people)),
        Action::FetchFailed { action, message } => Next::State(App {
            error: Some(format!("{action}: {message}")),
            ..state.clone()
        }),
        Action::Quit => Next::Effect(state.clone(), Effect::Quit),
    }
}

fn toggle_highlight(state: &App, index: usize) -> App {
    if index >= state.highlight.len() {
        warn!(
            "ToggleHighlight({}) out of range (len={}), ignoring",
            index,
            state.highlight.len()
        );
        return state.clone();
    }
    let mut highlight = state.highlight.clone();
    highlight[index] = !highlight[index];
    App {
        highlight,
        ..state.clone()
    }
}

fn select(state: &App, index: usize) -> Next {
    let Some(&id) = state.ids.get(index) else {
        warn!(
            "Select({}) out of range (len={}), ignoring",
            index,
            state.ids.len()
        );
        return Next::State(state.clone());
    };
    Next::Effect(
        App {
            selected: Some(index),
            ..state.clone()
        },
        Effect::fetch(state.user_url(id), Completion::GotBio),
    )
}

fn got_names(state: &App, people: &[PersonSummary]) -> App {
    let kept = &people[..people.len().min(LIST_LIMIT)];
    App {
        names: kept.iter().map(|p| p.name.clone()).collect(),
        ids: kept.iter().map(|p| p.id).collect(),
        highlight: vec![false; kept.len()],
        error: None,
        ..state.clone()
    }
}
