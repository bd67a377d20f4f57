//! Terminal output for the `cryptnote` commands.
//!
//! Commands build a [`UiContext`] through `AppContext::ui_context` and pass
//! it to the `render` helpers. JSON output bypasses this module.

mod context;
mod format;
mod render;
mod theme;

pub use context::UiContext;
pub use format::{format_bytes, strength_label, strength_meter, truncate};
pub use render::{badge, blank_line, field_table, header, hint, kv, print_error, receipt};
pub use theme::Badge;
