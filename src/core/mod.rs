//! # Core Application Logic
//!
//! This module contains Roster's state machine.
//! It knows nothing about any specific UI technology or transport.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (reducers)    │
//!                    │  • Effect descriptors   │
//!                    │  • Subscriptions        │
//!                    │  • View (vdom tree)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │            │  (fetch    │
//!            │ (ratatui)  │            │  runner)   │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — the whole state snapshot
//! - [`action`]: The `Action` enum and `update()` — every state transition
//! - [`subscription`]: State-derived key listeners and their reconciliation
//! - [`runtime`]: Dispatch loop tying the above together
//! - [`vdom`] / [`view`]: Declarative tree produced from state

pub mod action;
pub mod config;
pub mod person;
pub mod runtime;
pub mod state;
pub mod subscription;
pub mod vdom;
pub mod view;
