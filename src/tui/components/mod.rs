//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `StatusBar`: Top line with the demo title and status text
//!
//! ### Stateful Components
//!
//! - `TreeView`: Draws a `core::vdom::Node` tree and remembers which screen
//!   cells belong to which node, so clicks can be bubbled through the tree
//!
//! Each component file holds its props, state, rendering and tests.
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the `…State` lives in `TuiState`, the wrapper is built per frame.

mod status_bar;
pub use status_bar::StatusBar;

pub mod tree_view;
pub use tree_view::{TreeView, TreeViewState};
