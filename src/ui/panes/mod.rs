//! TUI pane rendering modules
//!
//! - [`values`]: the expandable tree of rendered values
//! - [`status`]: status bar with keybindings and the selected position
//! - `formatting`: styled spans for one tree row

mod formatting;

pub mod status;
pub mod values;

pub use status::{render_status_bar, StatusRenderData};
pub use values::{render_values_pane, ValuesRenderData, ValuesScrollState};
