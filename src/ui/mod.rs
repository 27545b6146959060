//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`tree`]**: flattened tree of rendered rows, expanded on demand
//! - **[`app`]**: application state and keyboard event loop
//! - **[`panes`]**: stateless render functions for the values pane and status bar
//! - **[`dump`]**: the same tree laid out as plain text for `--dump`
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an [`Engine`] and
//! the named roots to show, then call [`App::run`] to start the event loop.
//!
//! [`Engine`]: crate::render::Engine
//! [`App::run`]: app::App::run

pub mod app;
pub mod dump;
pub mod panes;
pub mod theme;
pub mod tree;

pub use app::App;
pub use tree::{Row, ValueTree};
